//! Tagged result of a driven operation.

use super::error::OperationError;

/// How an operation driven by
/// [`RequestStateHandle::with_state_outcome`](crate::state::RequestStateHandle::with_state_outcome)
/// ended.
///
/// Carries the same information as the callback record, returned to the
/// caller instead of pushed through side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Non-empty payload.
    Settled(T),
    /// Payload classified as "no results". `None` when the operation
    /// produced nothing at all.
    Empty(Option<T>),
    Failed(OperationError),
}

impl<T> Outcome<T> {
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Settled(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Settled(data) => Some(data),
            Self::Empty(data) => data.as_ref(),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&OperationError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Collapse back into the shape `with_state` returns.
    pub fn into_result(self) -> Result<Option<T>, OperationError> {
        match self {
            Self::Settled(data) => Ok(Some(data)),
            Self::Empty(data) => Ok(data),
            Self::Failed(err) => Err(err),
        }
    }
}
