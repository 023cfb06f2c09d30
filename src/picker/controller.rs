//! The directory picker state machine.
//!
//! [`PickerController`] is the only thing that mutates a [`PickerState`] or
//! its [`TransientErrorState`]. It consumes one [`PickerEvent`] at a time and
//! returns the [`PickerCommand`]s the event loop has to carry out; it never
//! sleeps, draws or talks to the terminal itself.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::models::Entry;
use crate::state::PickerState;
use crate::traits::{DirectoryProvider, ListingError};

use super::events::{Movement, PickerCommand, PickerEvent};
use super::transient_error::{TransientError, TransientErrorState, ERROR_TIMEOUT};
use super::validator::{classify, Eligibility};

/// Directory picker controller
#[derive(Debug)]
pub struct PickerController<P> {
    state: PickerState,
    errors: TransientErrorState,
    provider: P,
    error_timeout: Duration,
}

impl<P: DirectoryProvider> PickerController<P> {
    /// Create a controller for `dir`.
    ///
    /// The listing starts empty; send [`PickerEvent::Refresh`] to load it.
    pub fn new(dir: impl Into<PathBuf>, provider: P) -> Self {
        Self {
            state: PickerState::new(dir, Vec::new()),
            errors: TransientErrorState::new(),
            provider,
            error_timeout: ERROR_TIMEOUT,
        }
    }

    /// Create a controller with a listing already in hand.
    pub fn with_entries(dir: impl Into<PathBuf>, entries: Vec<Entry>, provider: P) -> Self {
        Self {
            state: PickerState::new(dir, entries),
            ..Self::new(PathBuf::new(), provider)
        }
    }

    /// Override how long transient errors stay visible.
    pub fn with_error_timeout(mut self, timeout: Duration) -> Self {
        self.error_timeout = timeout;
        self
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    pub fn error(&self) -> Option<&TransientError> {
        self.errors.current()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.errors.message()
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Consume the controller and return the final state.
    pub fn into_state(self) -> PickerState {
        self.state
    }

    /// Handle one event at the current time.
    pub fn handle_event(&mut self, event: PickerEvent) -> Vec<PickerCommand> {
        self.handle_event_at(event, Instant::now())
    }

    /// Handle one event, stamping any new error with `now`.
    pub fn handle_event_at(&mut self, event: PickerEvent, now: Instant) -> Vec<PickerCommand> {
        // A finished session only ever answers to quit.
        if self.state.is_finished() && event != PickerEvent::Quit {
            return Vec::new();
        }

        match event {
            PickerEvent::Quit => {
                tracing::info!(dir = %self.state.current_dir.display(), "Picker quit");
                self.state.quitting = true;
                vec![PickerCommand::Quit]
            }
            PickerEvent::Navigate(movement) => {
                self.navigate(movement);
                Vec::new()
            }
            PickerEvent::Open => self.open(now),
            PickerEvent::Back => self.back(now),
            PickerEvent::Confirm => self.confirm(now),
            PickerEvent::ErrorExpired(id) => {
                if self.errors.expire(id) {
                    tracing::trace!(?id, "Transient error expired");
                }
                Vec::new()
            }
            PickerEvent::Refresh => self.refresh(now),
            PickerEvent::Resize { rows } => {
                self.state.set_viewport_height(rows);
                Vec::new()
            }
        }
    }

    fn navigate(&mut self, movement: Movement) {
        match movement {
            Movement::Up => self.state.move_up(),
            Movement::Down => self.state.move_down(),
            Movement::PageUp => self.state.page_up(),
            Movement::PageDown => self.state.page_down(),
            Movement::Top => self.state.move_to_top(),
            Movement::Bottom => self.state.move_to_bottom(),
        }
    }

    fn open(&mut self, now: Instant) -> Vec<PickerCommand> {
        let Some(entry) = self.state.highlighted() else {
            return Vec::new();
        };
        if !entry.is_dir {
            return Vec::new();
        }

        let dir = entry.path.clone();
        match self.provider.list(&dir) {
            Ok(entries) => {
                tracing::debug!(dir = %dir.display(), count = entries.len(), "Entered directory");
                self.state.push_dir(dir, entries);
                Vec::new()
            }
            Err(err) => self.listing_failed(&err, now),
        }
    }

    fn back(&mut self, now: Instant) -> Vec<PickerCommand> {
        let Some(parent) = self.state.parent_dir().map(PathBuf::from) else {
            return Vec::new();
        };

        match self.provider.list(&parent) {
            Ok(entries) => {
                tracing::debug!(dir = %parent.display(), count = entries.len(), "Went up a directory");
                self.state.pop_dir(parent, entries);
                Vec::new()
            }
            Err(err) => self.listing_failed(&err, now),
        }
    }

    fn confirm(&mut self, now: Instant) -> Vec<PickerCommand> {
        let Some(entry) = self.state.highlighted() else {
            return Vec::new();
        };
        let path = entry.path.clone();

        match classify(entry) {
            Eligibility::EligibleDirectory => {
                tracing::info!(dir = %path.display(), "Directory selected");
                self.errors.clear();
                self.state.selection = Some(path.clone());
                vec![PickerCommand::Select(path)]
            }
            Eligibility::IneligibleFile => {
                self.reject(format!("{} is not a directory.", path.display()), now)
            }
            Eligibility::DisabledEntry => {
                self.reject(format!("{} is not valid.", path.display()), now)
            }
        }
    }

    fn reject(&mut self, message: String, now: Instant) -> Vec<PickerCommand> {
        tracing::info!(%message, "Selection rejected");
        self.state.selection = None;
        self.report(message, now)
    }

    fn refresh(&mut self, now: Instant) -> Vec<PickerCommand> {
        match self.provider.list(&self.state.current_dir) {
            Ok(entries) => {
                self.state.replace_entries(entries);
                Vec::new()
            }
            Err(err) => {
                self.state.replace_entries(Vec::new());
                self.listing_failed(&err, now)
            }
        }
    }

    fn listing_failed(&mut self, err: &ListingError, now: Instant) -> Vec<PickerCommand> {
        tracing::warn!(path = %err.path().display(), error = %err, "Directory listing failed");
        let message = match err {
            ListingError::NotFound { path } => format!("{} does not exist.", path.display()),
            ListingError::Unreadable { path, .. } => {
                format!("{} could not be read.", path.display())
            }
        };
        self.report(message, now)
    }

    /// Show `message` and ask for it to be cleared after the timeout.
    fn report(&mut self, message: String, now: Instant) -> Vec<PickerCommand> {
        let id = self.errors.set(message, now);
        vec![PickerCommand::ClearErrorAfter {
            id,
            delay: self.error_timeout,
        }]
    }
}
