//! Per-invocation lifecycle callbacks.

use super::error::OperationError;

type Hook<'a> = Box<dyn FnOnce() + Send + 'a>;
type DataHook<'a, T> = Box<dyn FnOnce(&T) + Send + 'a>;
type ErrorHook<'a> = Box<dyn FnOnce(&OperationError) + Send + 'a>;

/// Optional hooks fired by [`RequestStateHandle::with_state`].
///
/// `on_loading` fires before the operation starts. Exactly one of
/// `on_error`, `on_empty` and `on_data` fires once the operation settles.
///
/// [`RequestStateHandle::with_state`]: crate::state::RequestStateHandle::with_state
pub struct Callbacks<'a, T> {
    on_loading: Option<Hook<'a>>,
    on_error: Option<ErrorHook<'a>>,
    on_empty: Option<Hook<'a>>,
    on_data: Option<DataHook<'a, T>>,
}

impl<T> Default for Callbacks<'_, T> {
    fn default() -> Self {
        Self {
            on_loading: None,
            on_error: None,
            on_empty: None,
            on_data: None,
        }
    }
}

impl<'a, T> Callbacks<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_loading(mut self, f: impl FnOnce() + Send + 'a) -> Self {
        self.on_loading = Some(Box::new(f));
        self
    }

    pub fn on_error(mut self, f: impl FnOnce(&OperationError) + Send + 'a) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    pub fn on_empty(mut self, f: impl FnOnce() + Send + 'a) -> Self {
        self.on_empty = Some(Box::new(f));
        self
    }

    pub fn on_data(mut self, f: impl FnOnce(&T) + Send + 'a) -> Self {
        self.on_data = Some(Box::new(f));
        self
    }

    pub(crate) fn loading(&mut self) {
        if let Some(f) = self.on_loading.take() {
            f();
        }
    }

    pub(crate) fn error(self, err: &OperationError) {
        if let Some(f) = self.on_error {
            f(err);
        }
    }

    pub(crate) fn empty(self) {
        if let Some(f) = self.on_empty {
            f();
        }
    }

    pub(crate) fn data(self, value: &T) {
        if let Some(f) = self.on_data {
            f(value);
        }
    }
}
