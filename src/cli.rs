//! Command-line front end: run one backend query through a request state
//! container and print the state it ends in.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::Value;

use crate::api;
use crate::config::{AppConfig, ConfigError};
use crate::net::NetClient;
use crate::state::{Callbacks, RequestState, RequestStateHandle, StateValue, StateView};

#[derive(Debug, Parser)]
#[command(name = "launcher-client", version, about = "Query the local launcher backend")]
pub struct Cli {
    /// Config file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend origin, e.g. http://127.0.0.1:12345
    #[arg(long, global = true)]
    pub origin: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// GET an arbitrary route under /api/v1
    Get {
        path: String,
        /// Query parameter as key=value (repeatable)
        #[arg(short = 'q', long = "query", value_parser = parse_key_value)]
        query: Vec<(String, String)>,
        /// Report HTTP, envelope, and backend-code failures as errors
        #[arg(long)]
        strict: bool,
    },
    /// POST to an arbitrary route under /api/v1
    Post {
        path: String,
        /// JSON request body
        #[arg(long, value_parser = parse_json)]
        body: Option<Value>,
        /// Report HTTP, envelope, and backend-code failures as errors
        #[arg(long)]
        strict: bool,
    },
    /// Search launchable entries
    Search { query: Option<String> },
    /// List installed plugins
    Plugins,
    /// Show one plugin
    Plugin { id: String },
    /// Call a plugin's own route, e.g. `invoke adb devices`
    Invoke { id: String, path: String },
    /// Scan a directory for plugins
    Scan { path: Option<String> },
    /// Remove a plugin
    Delete { id: String },
    /// Print the resolved startup configuration
    Config,
}

/// Text produced for one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// The request ended in the error state.
    pub failed: bool,
}

impl Cli {
    /// Load config from `--config` (or the default path) and apply `--origin`.
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from(path)?,
            None => AppConfig::load()?,
        };
        if let Some(origin) = &self.origin {
            config.server.origin = origin.clone();
            config.validate()?;
        }
        Ok(config)
    }
}

pub async fn execute(command: Command, config: &AppConfig) -> anyhow::Result<Rendered> {
    if let Command::Config = command {
        return Ok(Rendered {
            text: toml::to_string_pretty(config)?,
            failed: false,
        });
    }

    let net = NetClient::new(&config.server)?;
    let handle = RequestStateHandle::<Value>::new();
    let callbacks = Callbacks::new()
        .on_loading(|| tracing::debug!("request started"))
        .on_error(|err| tracing::warn!(error = %err, "request failed"))
        .on_empty(|| tracing::info!("no results"))
        .on_data(|_| tracing::debug!("data received"));

    let result = handle
        .with_state(|| fetch(&net, command), callbacks)
        .await;
    if let Err(err) = result {
        tracing::debug!(error = %err, "rendering failed state");
    }

    let state = handle.snapshot();
    Ok(Rendered {
        text: render(&state),
        failed: state.state_value() == StateValue::Error,
    })
}

async fn fetch(net: &NetClient, command: Command) -> anyhow::Result<Option<Value>> {
    match command {
        Command::Get {
            path,
            query,
            strict,
        } => {
            let data = match (query.is_empty(), strict) {
                (true, false) => net.get(&path).await?,
                (true, true) => net.get_strict(&path).await?,
                (false, false) => net.get_query(&path, &query).await?,
                (false, true) => net.get_query_strict(&path, &query).await?,
            };
            Ok(data)
        }
        Command::Post { path, body, strict } => {
            let data = match (body, strict) {
                (Some(body), false) => net.post(&path, &body).await?,
                (Some(body), true) => net.post_strict(&path, &body).await?,
                (None, false) => net.post_empty(&path).await?,
                (None, true) => net.post_empty_strict(&path).await?,
            };
            Ok(data)
        }
        Command::Search { query } => as_json(api::search(net, query.as_deref()).await?),
        Command::Plugins => as_json(api::plugin_list(net).await?),
        Command::Plugin { id } => as_json(api::plugin_info(net, &id).await?),
        Command::Invoke { id, path } => Ok(api::plugin_invoke(net, &id, &path).await?),
        Command::Scan { path } => as_json(api::plugin_scan(net, path.as_deref()).await?),
        Command::Delete { id } => as_json(api::plugin_delete(net, &id).await?),
        Command::Config => Ok(None),
    }
}

fn as_json<T: Serialize>(data: Option<T>) -> anyhow::Result<Option<Value>> {
    data.map(serde_json::to_value).transpose().map_err(Into::into)
}

/// Render a snapshot as exactly one of the four visual states.
pub fn render<T: Serialize>(state: &RequestState<T>) -> String {
    match state.view() {
        StateView::Loading => "Loading...".to_string(),
        StateView::Error(err) => format!("Error: {}", err),
        StateView::Empty => "No results".to_string(),
        StateView::Data(Some(data)) => serde_json::to_string_pretty(data)
            .unwrap_or_else(|e| format!("<unprintable data: {}>", e)),
        StateView::Data(None) => String::new(),
    }
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

fn parse_json(raw: &str) -> Result<Value, String> {
    serde_json::from_str(raw).map_err(|e| format!("invalid JSON body: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OperationError;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_get_with_queries() {
        let cli = Cli::try_parse_from([
            "launcher-client",
            "--origin",
            "http://127.0.0.1:9",
            "get",
            "/search/s",
            "-q",
            "q=fire",
            "--strict",
        ])
        .expect("parse");

        assert_eq!(cli.origin.as_deref(), Some("http://127.0.0.1:9"));
        match cli.command {
            Command::Get {
                path,
                query,
                strict,
            } => {
                assert_eq!(path, "/search/s");
                assert_eq!(query, vec![("q".to_string(), "fire".to_string())]);
                assert!(strict);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn rejects_malformed_query_and_body() {
        assert!(Cli::try_parse_from(["launcher-client", "get", "/x", "-q", "novalue"]).is_err());
        assert!(Cli::try_parse_from(["launcher-client", "post", "/x", "--body", "{"]).is_err());
    }

    #[test]
    fn key_value_keeps_equals_in_value() {
        assert_eq!(
            parse_key_value("expr=a=b"),
            Ok(("expr".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_value("=x").is_err());
    }

    #[test]
    fn renders_each_visual_state() {
        assert_eq!(render(&RequestState::<Value>::pending()), "Loading...");

        let failed = RequestState::<Value> {
            error: Some(OperationError::new(anyhow::anyhow!("boom"))),
            ..RequestState::idle()
        };
        assert_eq!(render(&failed), "Error: boom");

        let empty = RequestState::<Value> {
            is_empty: true,
            ..RequestState::idle()
        };
        assert_eq!(render(&empty), "No results");

        let data = RequestState {
            data: Some(json!({"a": 1})),
            ..RequestState::idle()
        };
        assert_eq!(render(&data), "{\n  \"a\": 1\n}");
        assert_eq!(render(&RequestState::<Value>::idle()), "");
    }

    #[tokio::test]
    async fn config_command_prints_toml() {
        let rendered = execute(Command::Config, &AppConfig::default())
            .await
            .expect("render");
        assert!(!rendered.failed);
        assert!(rendered.text.contains("origin = \"http://127.0.0.1:12345\""));
        assert!(rendered.text.contains("drag = \"drag-window\""));
    }
}
