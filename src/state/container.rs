//! Request state container and the driver that advances it.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use super::callbacks::Callbacks;
use super::emptiness;
use super::error::OperationError;
use super::outcome::Outcome;
use super::request::RequestState;

/// What happens when a new operation starts before the previous one settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyMode {
    /// Every completion writes its result; the last one to settle wins,
    /// even if it was started first.
    #[default]
    LastWriteWins,
    /// Only the most recently started operation may write. Completions of
    /// superseded operations (including ones superseded by `reset`) leave
    /// the container untouched and fire no settle callbacks.
    LatestOnly,
}

/// Shared handle to one request's state.
///
/// Clones observe and drive the same container. Observers either take a
/// [`snapshot`](Self::snapshot) or [`subscribe`](Self::subscribe) to be
/// woken on every transition.
pub struct RequestStateHandle<T> {
    state: Arc<watch::Sender<RequestState<T>>>,
    generation: Arc<AtomicU64>,
    mode: ConcurrencyMode,
}

impl<T> Clone for RequestStateHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            generation: Arc::clone(&self.generation),
            mode: self.mode,
        }
    }
}

impl<T: Serialize + Clone> Default for RequestStateHandle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize + Clone> RequestStateHandle<T> {
    pub fn new() -> Self {
        Self::with_mode(ConcurrencyMode::default())
    }

    pub fn with_mode(mode: ConcurrencyMode) -> Self {
        let (state, _) = watch::channel(RequestState::idle());
        Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            mode,
        }
    }

    pub fn mode(&self) -> ConcurrencyMode {
        self.mode
    }

    pub fn snapshot(&self) -> RequestState<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<RequestState<T>> {
        self.state.subscribe()
    }

    /// Return to idle. In-flight operations are neither cancelled nor awaited.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_modify(|state| *state = RequestState::idle());
        tracing::debug!("request state reset");
    }

    /// Drive `operation` through pending and into settled or failed.
    ///
    /// The resolved value is returned as-is; a failure is stored, reported
    /// to `on_error`, and returned as the same [`OperationError`].
    pub async fn with_state<F, Fut, R, E>(
        &self,
        operation: F,
        callbacks: Callbacks<'_, T>,
    ) -> Result<Option<T>, OperationError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R, E>>,
        R: Into<Option<T>>,
        E: Into<anyhow::Error>,
    {
        self.drive(operation, callbacks).await.map(|(data, _)| data)
    }

    /// Same transitions as [`with_state`](Self::with_state), with the result
    /// returned as an [`Outcome`] instead of pushed through callbacks.
    pub async fn with_state_outcome<F, Fut, R, E>(&self, operation: F) -> Outcome<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R, E>>,
        R: Into<Option<T>>,
        E: Into<anyhow::Error>,
    {
        match self.drive(operation, Callbacks::default()).await {
            Ok((Some(data), false)) => Outcome::Settled(data),
            Ok((data, _)) => Outcome::Empty(data),
            Err(err) => Outcome::Failed(err),
        }
    }

    async fn drive<F, Fut, R, E>(
        &self,
        operation: F,
        mut callbacks: Callbacks<'_, T>,
    ) -> Result<(Option<T>, bool), OperationError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<R, E>>,
        R: Into<Option<T>>,
        E: Into<anyhow::Error>,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| *state = RequestState::pending());
        tracing::debug!(generation, "request pending");
        callbacks.loading();

        match operation().await {
            Ok(value) => {
                let data: Option<T> = value.into();
                let empty = emptiness::is_empty(&data);
                if !self.is_current(generation) {
                    tracing::debug!(generation, "discarding stale completion");
                    return Ok((data, empty));
                }

                let settled = RequestState {
                    loading: false,
                    error: None,
                    data: data.clone(),
                    is_empty: empty,
                };
                self.state.send_modify(|state| *state = settled);
                tracing::debug!(generation, empty, "request settled");

                match (&data, empty) {
                    (Some(value), false) => callbacks.data(value),
                    _ => callbacks.empty(),
                }
                Ok((data, empty))
            }
            Err(err) => {
                let err = OperationError::new(err);
                if !self.is_current(generation) {
                    tracing::debug!(generation, error = %err, "discarding stale failure");
                    return Err(err);
                }

                let failed = RequestState {
                    error: Some(err.clone()),
                    ..RequestState::idle()
                };
                self.state.send_modify(|state| *state = failed);
                tracing::warn!(generation, error = %err, "request failed");

                callbacks.error(&err);
                Err(err)
            }
        }
    }

    fn is_current(&self, generation: u64) -> bool {
        match self.mode {
            ConcurrencyMode::LastWriteWins => true,
            ConcurrencyMode::LatestOnly => self.generation.load(Ordering::SeqCst) == generation,
        }
    }
}
