use clap::Parser;

use launcher_client::cli::{self, Cli};
use launcher_client::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Cli::parse();
    let config = args.load_config()?;
    let rendered = cli::execute(args.command, &config).await?;

    println!("{}", rendered.text);
    if rendered.failed {
        std::process::exit(1);
    }
    Ok(())
}
