//! Directory picker rendering
//!
//! Pure mapping from [`PickerController`] state to ratatui lines. The picker
//! occupies the whole frame:
//!
//! - Header: the transient error if one is shown, otherwise the prompt or the
//!   confirmed selection
//! - The directory being browsed
//! - The visible slice of the listing with scroll indicators
//! - A key hint line

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::Entry;
use crate::picker::{is_eligible, PickerController};
use crate::traits::DirectoryProvider;

use super::theme::{
    COLOR_ACCENT, COLOR_DIM, COLOR_DIRECTORY, COLOR_ERROR, COLOR_HEADER, COLOR_PERMISSIONS,
    COLOR_SELECTED,
};

/// Prompt shown while nothing has been chosen
pub const PROMPT: &str = "Pick a directory:";

/// Shown in place of the listing when a directory has no entries
pub const EMPTY_LISTING: &str = "No entries in this directory";

/// Rows used by everything except the listing itself: header, directory,
/// spacer, two scroll indicators, spacer and hint.
pub const CHROME_ROWS: u16 = 7;

/// Display options that do not live in the picker state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show the `drwxr-xr-x` column before each name
    pub show_permissions: bool,
}

/// Listing rows available in a frame `height` rows tall.
pub fn listing_rows(height: u16) -> usize {
    height.saturating_sub(CHROME_ROWS).max(1) as usize
}

/// Render the picker into the whole frame
pub fn render_picker<P: DirectoryProvider>(
    frame: &mut Frame,
    controller: &PickerController<P>,
    options: RenderOptions,
) {
    let area = frame.area();
    let lines = build_picker_lines(controller, options, area.width as usize);
    frame.render_widget(Paragraph::new(lines), area);
}

/// Build the display lines for the picker
pub fn build_picker_lines<P: DirectoryProvider>(
    controller: &PickerController<P>,
    options: RenderOptions,
    available_width: usize,
) -> Vec<Line<'static>> {
    let state = controller.state();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(build_header_line(controller));
    lines.push(Line::from(Span::styled(
        format!("  {}", state.current_dir.display()),
        Style::default().fg(COLOR_DIM),
    )));
    lines.push(Line::from(""));

    if state.entries.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("  {}", EMPTY_LISTING),
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        )));
    } else {
        if state.has_more_above() {
            lines.push(Line::from(Span::styled(
                format!("  + {} more above", state.scroll_offset),
                Style::default().fg(COLOR_DIM),
            )));
        }

        let visible = state.visible_entries();
        for (rel_idx, entry) in visible.iter().enumerate() {
            let is_cursor = state.scroll_offset + rel_idx == state.cursor;
            lines.push(render_entry_line(entry, is_cursor, options, available_width));
        }

        if state.has_more_below() {
            let remaining = state.entries.len() - (state.scroll_offset + visible.len());
            lines.push(Line::from(Span::styled(
                format!("  + {} more below", remaining),
                Style::default().fg(COLOR_DIM),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(build_hint_line());

    lines
}

/// Error beats prompt beats selection.
fn build_header_line<P: DirectoryProvider>(controller: &PickerController<P>) -> Line<'static> {
    if let Some(message) = controller.error_message() {
        return Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ));
    }

    match &controller.state().selection {
        None => Line::from(Span::styled(
            PROMPT,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Some(path) => Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(COLOR_HEADER)),
            Span::styled(
                path.display().to_string(),
                Style::default()
                    .fg(COLOR_SELECTED)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    }
}

/// Render a single listing row
fn render_entry_line(
    entry: &Entry,
    is_cursor: bool,
    options: RenderOptions,
    available_width: usize,
) -> Line<'static> {
    let marker = if is_cursor { "› " } else { "  " };
    let marker_style = if is_cursor {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut name_style = if entry.disabled {
        Style::default().fg(COLOR_DIM)
    } else if is_eligible(entry) {
        Style::default().fg(COLOR_DIRECTORY)
    } else {
        Style::default()
    };
    if is_cursor {
        name_style = name_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let mut spans = vec![Span::styled(marker, marker_style)];
    let mut used = marker.width();

    if options.show_permissions {
        let mode = entry
            .format_mode()
            .unwrap_or_else(|| "-".repeat(10));
        used += mode.width() + 1;
        spans.push(Span::styled(
            format!("{} ", mode),
            Style::default().fg(if entry.disabled { COLOR_DIM } else { COLOR_PERMISSIONS }),
        ));
    }

    let size = entry.format_size().unwrap_or_default();
    let size_len = if size.is_empty() { 0 } else { size.width() + 2 };

    let name = if entry.is_dir {
        format!("{}/", entry.name)
    } else {
        entry.name.clone()
    };
    let name = truncate_to_width(&name, available_width.saturating_sub(used + size_len));
    used += name.width();
    spans.push(Span::styled(name, name_style));

    if !size.is_empty() {
        let padding = available_width.saturating_sub(used + size.width()).max(2);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(size, Style::default().fg(COLOR_DIM)));
    }

    Line::from(spans)
}

/// Cut `text` to at most `max` columns, ending in an ellipsis when shortened.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let budget = max.saturating_sub(1);
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        out.push(ch);
    }
    if max > 0 {
        out.push('…');
    }
    out
}

/// Key hints
fn build_hint_line() -> Line<'static> {
    let key = Style::default().fg(COLOR_ACCENT);
    let label = Style::default().fg(COLOR_DIM);
    let sep = || Span::styled(" │ ", Style::default().fg(COLOR_DIM));

    Line::from(vec![
        Span::raw("  "),
        Span::styled("↑↓", key),
        Span::styled(" nav", label),
        sep(),
        Span::styled("←", key),
        Span::styled(" back", label),
        sep(),
        Span::styled("→", key),
        Span::styled(" into", label),
        sep(),
        Span::styled("Enter", key),
        Span::styled(" select", label),
        sep(),
        Span::styled("q", key),
        Span::styled(" quit", label),
    ])
}
