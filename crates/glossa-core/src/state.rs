use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

pub const IN_FLIGHT_STATUS: &str = "Translating...";

/// Lifecycle of the most recent translate request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

/// What the presentation layer shows: a status line and the output text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplaySnapshot {
    pub status: String,
    pub output: String,
}

impl DisplaySnapshot {
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.status, &self.output)
    }
}

/// State shared between the render context and every request task
#[derive(Debug, Default)]
pub(crate) struct Shared {
    pub(crate) state: RequestState,
    /// Output of the last successful request, kept across failures
    pub(crate) last_output: String,
    /// Sequence number of the most recently started request
    pub(crate) sequence: u64,
    pub(crate) in_flight: usize,
    /// Token of the running request when stale requests get cancelled
    pub(crate) current: Option<CancellationToken>,
}

impl Shared {
    pub(crate) fn display(&self) -> DisplaySnapshot {
        match &self.state {
            RequestState::Idle => DisplaySnapshot {
                status: String::new(),
                output: self.last_output.clone(),
            },
            RequestState::InFlight => DisplaySnapshot {
                status: IN_FLIGHT_STATUS.to_string(),
                output: self.last_output.clone(),
            },
            RequestState::Succeeded(text) => DisplaySnapshot {
                status: String::new(),
                output: text.clone(),
            },
            RequestState::Failed(message) => DisplaySnapshot {
                status: format!("Error: {message}"),
                output: self.last_output.clone(),
            },
        }
    }
}

pub(crate) type SharedState = Arc<Mutex<Shared>>;

pub(crate) fn lock(shared: &SharedState) -> MutexGuard<'_, Shared> {
    // A panicking task cannot leave Shared half-written: every update is a plain field store
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read-only view of the controller's state for the presentation layer
#[derive(Clone)]
pub struct DisplayHandle {
    shared: SharedState,
}

impl DisplayHandle {
    pub(crate) fn new(shared: SharedState) -> Self {
        Self { shared }
    }

    pub fn current_display(&self) -> DisplaySnapshot {
        lock(&self.shared).display()
    }
}
