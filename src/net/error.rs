//! Failure taxonomy of a backend call.

use thiserror::Error;

/// Errors that can occur while talking to the launcher backend.
///
/// The default client methods only ever surface [`NetError::Connection`];
/// the other variants are folded into an empty result unless a `*_strict`
/// method is used.
#[derive(Debug, Error)]
pub enum NetError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Configured origin does not form a base URL
    #[error("Invalid backend origin '{origin}': {reason}")]
    Origin { origin: String, reason: String },

    /// No response was received (DNS, refused connection, reset before headers)
    #[error("Request to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response headers arrived but the body broke off
    #[error("Response body from '{url}' could not be read: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response status outside the 2xx range
    #[error("Request to '{url}' returned HTTP {status}")]
    Transport { url: String, status: u16 },

    /// Body is not an envelope
    #[error("Response from '{url}' is not a valid envelope: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    /// Envelope carried a non-zero code
    #[error("Backend reported code {code}: {}", .message.as_deref().unwrap_or("no message"))]
    Protocol { code: i64, message: Option<String> },
}

impl NetError {
    /// Short error kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            NetError::Client(_) => "client_error",
            NetError::Origin { .. } => "invalid_origin",
            NetError::Connection { .. } => "connection_error",
            NetError::Body { .. } => "body_error",
            NetError::Transport { .. } => "transport_error",
            NetError::Malformed { .. } => "malformed_envelope",
            NetError::Protocol { .. } => "protocol_error",
        }
    }

    /// Whether the lenient client reports this as "no data" instead of failing.
    pub fn collapses_to_empty(&self) -> bool {
        matches!(
            self,
            NetError::Body { .. }
                | NetError::Transport { .. }
                | NetError::Malformed { .. }
                | NetError::Protocol { .. }
        )
    }
}
