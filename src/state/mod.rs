//! Request state orchestration.
//!
//! A [`RequestStateHandle`] owns one [`RequestState`] snapshot and moves it
//! through idle, pending, and then settled or failed as an operation runs.
//! The [`emptiness`] rule decides whether settled data renders as "no
//! results".

mod callbacks;
mod container;
pub mod emptiness;
mod error;
mod outcome;
mod request;

pub use callbacks::Callbacks;
pub use container::{ConcurrencyMode, RequestStateHandle};
pub use emptiness::is_empty;
pub use error::OperationError;
pub use outcome::Outcome;
pub use request::{Phase, RequestState, StateValue, StateView};
