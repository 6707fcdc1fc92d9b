//! Request-state orchestration for the launcher front-end.
//!
//! ```text
//! caller ──→ RequestStateHandle::with_state ──→ operation (NetClient::get/post)
//!                  │                                   │
//!                  │                 Envelope unwrap ←─┘
//!                  ▼
//!          Emptiness Rule ──→ RequestState snapshot ──→ renderer
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod net;
pub mod state;
