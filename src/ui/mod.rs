//! UI rendering for the directory picker
//!
//! Rendering is a pure function of the controller: nothing in here mutates
//! picker state.

mod picker;
mod theme;

pub use picker::{
    build_picker_lines, listing_rows, render_picker, RenderOptions, CHROME_ROWS, EMPTY_LISTING,
    PROMPT,
};

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_DIRECTORY, COLOR_ERROR, COLOR_HEADER, COLOR_PERMISSIONS,
    COLOR_SELECTED,
};
