//! Picker events and the commands the controller hands back to the loop.

use std::path::PathBuf;
use std::time::Duration;

use super::transient_error::ErrorId;

/// Cursor movements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
}

/// Input to [`PickerController::handle_event`](super::PickerController::handle_event)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// Leave the picker without choosing
    Quit,
    /// Move the cursor
    Navigate(Movement),
    /// Descend into the highlighted directory
    Open,
    /// Go to the parent directory
    Back,
    /// Choose the highlighted entry
    Confirm,
    /// The timer for a transient error fired
    ErrorExpired(ErrorId),
    /// Re-list the current directory
    Refresh,
    /// The listing area now has room for `rows` entries
    Resize { rows: usize },
}

/// Side effects requested by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerCommand {
    /// End the session without a selection
    Quit,
    /// End the session with this directory
    Select(PathBuf),
    /// Feed `ErrorExpired(id)` back after `delay`
    ClearErrorAfter { id: ErrorId, delay: Duration },
}
