//! Envelope HTTP client for the launcher backend.
//!
//! Every response is an [`Envelope`]; the client unwraps it into the bare
//! payload.

mod client;
mod envelope;
mod error;

pub use client::{NetClient, API_PREFIX};
pub use envelope::Envelope;
pub use error::NetError;
