//! Application state containers.

pub mod picker;

pub use picker::{PickerState, SavedCursor, DEFAULT_VIEWPORT_ROWS};
