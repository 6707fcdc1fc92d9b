//! Startup configuration.
//!
//! Read once before any network call and then passed by reference to
//! whatever needs it; nothing in the crate mutates it afterwards.

mod loader;
mod types;

pub use loader::{ConfigError, ORIGIN_ENV};
pub use types::{AppConfig, IpcMessages, ServerConfig};
