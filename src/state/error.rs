//! Error captured by a failed operation.

use std::fmt;
use std::sync::Arc;

/// Failure of an operation driven through a [`RequestStateHandle`].
///
/// Cheap to clone: the snapshot, the `on_error` callback and the caller all
/// see the same underlying error.
///
/// [`RequestStateHandle`]: crate::state::RequestStateHandle
#[derive(Clone)]
pub struct OperationError(Arc<anyhow::Error>);

impl OperationError {
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(Arc::new(err.into()))
    }

    /// Top-level message, without the source chain.
    pub fn message(&self) -> String {
        self.0.to_string()
    }

    /// Returns `true` if both handles point at the same failure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    pub fn inner(&self) -> &anyhow::Error {
        &self.0
    }
}

impl fmt::Debug for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl fmt::Display for OperationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl std::error::Error for OperationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

/// Identity comparison; two failures with equal messages are still distinct.
impl PartialEq for OperationError {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}
