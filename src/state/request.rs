//! UI-facing snapshot of one asynchronous operation.

use super::error::OperationError;

/// Snapshot of a request's progress and outcome.
///
/// Only [`RequestStateHandle`](crate::state::RequestStateHandle) produces
/// new values; renderers read clones.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestState<T> {
    pub loading: bool,
    pub error: Option<OperationError>,
    pub data: Option<T>,
    pub is_empty: bool,
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Lifecycle position derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pending,
    Settled,
    Failed,
}

/// The four visual states a renderer chooses between.
///
/// Discriminants match the values the host-side UI uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum StateValue {
    Loading = 0,
    Error = 1,
    Empty = 2,
    Data = 3,
}

/// Borrowed view of a snapshot, resolved to exactly one visual state.
#[derive(Debug, PartialEq)]
pub enum StateView<'a, T> {
    Loading,
    Error(&'a OperationError),
    Empty,
    /// `None` only before the first operation has run.
    Data(Option<&'a T>),
}

impl<T> RequestState<T> {
    pub fn idle() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
            is_empty: false,
        }
    }

    pub fn pending() -> Self {
        Self {
            loading: true,
            ..Self::idle()
        }
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Pending
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.data.is_some() || self.is_empty {
            Phase::Settled
        } else {
            Phase::Idle
        }
    }

    /// Precedence: loading, then error, then empty, then data.
    pub fn state_value(&self) -> StateValue {
        if self.loading {
            StateValue::Loading
        } else if self.error.is_some() {
            StateValue::Error
        } else if self.is_empty {
            StateValue::Empty
        } else {
            StateValue::Data
        }
    }

    pub fn view(&self) -> StateView<'_, T> {
        match self.state_value() {
            StateValue::Loading => StateView::Loading,
            StateValue::Error => match &self.error {
                Some(err) => StateView::Error(err),
                None => StateView::Data(self.data.as_ref()),
            },
            StateValue::Empty => StateView::Empty,
            StateValue::Data => StateView::Data(self.data.as_ref()),
        }
    }

    /// Checks the mutual-exclusion invariants between the fields.
    pub fn is_consistent(&self) -> bool {
        if self.loading {
            return self.error.is_none() && self.data.is_none() && !self.is_empty;
        }
        if self.error.is_some() {
            return self.data.is_none() && !self.is_empty;
        }
        true
    }
}

impl From<StateValue> for u8 {
    fn from(value: StateValue) -> Self {
        value as u8
    }
}
