//! Transient error state.
//!
//! Holds at most one user-facing error message. Every [`set`] issues a fresh
//! [`ErrorId`]; the expiry timer carries that id back so a timer belonging to
//! an error that was already replaced cannot clear the newer one.
//!
//! [`set`]: TransientErrorState::set

use std::time::{Duration, Instant};

/// How long an invalid-selection message stays on screen.
pub const ERROR_TIMEOUT: Duration = Duration::from_secs(2);

/// Identity of one error occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorId(u64);

/// The currently displayed error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientError {
    pub id: ErrorId,
    pub message: String,
    pub created_at: Instant,
}

/// Owner of the active transient error.
#[derive(Debug, Clone, Default)]
pub struct TransientErrorState {
    current: Option<TransientError>,
    next_id: u64,
}

impl TransientErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any current error and return the id its timer must carry.
    pub fn set(&mut self, message: impl Into<String>, now: Instant) -> ErrorId {
        let id = ErrorId(self.next_id);
        self.next_id += 1;
        self.current = Some(TransientError {
            id,
            message: message.into(),
            created_at: now,
        });
        id
    }

    /// Remove the current error unconditionally.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Clear the current error only if it is the one identified by `id`.
    ///
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, id: ErrorId) -> bool {
        match &self.current {
            Some(err) if err.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&TransientError> {
        self.current.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|err| err.message.as_str())
    }
}
