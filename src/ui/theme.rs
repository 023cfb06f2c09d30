//! Color theme constants for the directory picker
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Accent color - white for highlights and key names in hints
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Directory names - cyan so they stand apart from files
pub const COLOR_DIRECTORY: Color = Color::Cyan;

/// Confirmed selection - green #04B575
pub const COLOR_SELECTED: Color = Color::Rgb(4, 181, 117);

/// Transient error messages
pub const COLOR_ERROR: Color = Color::Red;

/// Dim text for less important info (paths, sizes, disabled entries)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Permission column
pub const COLOR_PERMISSIONS: Color = Color::Gray;
