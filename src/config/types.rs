use serde::{Deserialize, Serialize};

/// Startup configuration, built once and shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ipc: IpcMessages,
}

/// Location of the local launcher backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Scheme + host + port (e.g., "http://127.0.0.1:12345").
    #[serde(default = "default_origin")]
    pub origin: String,
}

/// Message identifiers posted to the host window process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpcMessages {
    /// Start dragging the frameless window.
    #[serde(default = "default_drag")]
    pub drag: String,
    /// Open another launcher window.
    #[serde(default = "default_new_window")]
    pub new_window: String,
    /// Quit the host.
    #[serde(default = "default_exit")]
    pub exit: String,
}

fn default_origin() -> String {
    "http://127.0.0.1:12345".to_string()
}

fn default_drag() -> String {
    "drag-window".to_string()
}

fn default_new_window() -> String {
    "new".to_string()
}

fn default_exit() -> String {
    "exit".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

impl Default for IpcMessages {
    fn default() -> Self {
        Self {
            drag: default_drag(),
            new_window: default_new_window(),
            exit: default_exit(),
        }
    }
}

impl ServerConfig {
    /// Origin without trailing slashes, ready to have a path appended.
    pub fn normalized_origin(&self) -> &str {
        self.origin.trim_end_matches('/')
    }
}
