//! Directory picker state.
//!
//! Plain data for one picker session: the directory being browsed, its
//! listing, cursor and viewport, and the outcome flags. All mutation goes
//! through [`PickerController`](crate::picker::PickerController); the methods
//! here only keep the cursor and viewport invariants.

use std::path::{Path, PathBuf};

use crate::models::Entry;

/// Visible rows before the terminal reports its real size
pub const DEFAULT_VIEWPORT_ROWS: usize = 10;

/// Cursor position remembered when descending into a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavedCursor {
    pub cursor: usize,
    pub scroll_offset: usize,
}

/// Picker session state
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Directory being browsed
    pub current_dir: PathBuf,

    /// Listing of `current_dir`, in display order
    pub entries: Vec<Entry>,

    /// Index of the highlighted entry (0 when the listing is empty)
    pub cursor: usize,

    /// First visible row
    pub scroll_offset: usize,

    /// Number of listing rows that fit on screen
    pub viewport_height: usize,

    /// Confirmed destination directory
    pub selection: Option<PathBuf>,

    /// Set once the user asked to leave
    pub quitting: bool,

    /// Cursor positions of the directories above `current_dir`
    pub history: Vec<SavedCursor>,
}

impl PickerState {
    /// Create a session rooted at `dir` with an initial listing.
    pub fn new(dir: impl Into<PathBuf>, entries: Vec<Entry>) -> Self {
        Self {
            current_dir: dir.into(),
            entries,
            cursor: 0,
            scroll_offset: 0,
            viewport_height: DEFAULT_VIEWPORT_ROWS,
            selection: None,
            quitting: false,
            history: Vec::new(),
        }
    }

    /// Get the highlighted entry
    pub fn highlighted(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    /// Whether a session has ended, successfully or not.
    pub fn is_finished(&self) -> bool {
        self.quitting || self.selection.is_some()
    }

    /// Descend into `dir`, remembering where the cursor was.
    pub fn push_dir(&mut self, dir: PathBuf, entries: Vec<Entry>) {
        self.history.push(SavedCursor {
            cursor: self.cursor,
            scroll_offset: self.scroll_offset,
        });
        self.current_dir = dir;
        self.entries = entries;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.selection = None;
    }

    /// Move up to `dir`, restoring the remembered cursor when there is one.
    ///
    /// Above the directory the session started in nothing is remembered, so
    /// the cursor lands on the directory we just left.
    pub fn pop_dir(&mut self, dir: PathBuf, entries: Vec<Entry>) {
        let left = self
            .current_dir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let saved = self.history.pop();
        self.current_dir = dir;
        self.entries = entries;
        self.selection = None;
        match saved {
            Some(saved) => {
                self.cursor = saved.cursor;
                self.scroll_offset = saved.scroll_offset;
            }
            None => {
                self.cursor = left
                    .and_then(|name| self.entries.iter().position(|e| e.name == name))
                    .unwrap_or(0);
                self.scroll_offset = 0;
            }
        }
        self.clamp_cursor();
    }

    /// Replace the listing of the current directory.
    pub fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.clamp_cursor();
    }

    /// Parent of the current directory, if there is one to go to.
    pub fn parent_dir(&self) -> Option<&Path> {
        self.current_dir
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
    }

    pub fn move_up(&mut self) {
        self.move_to(self.cursor.saturating_sub(1));
    }

    pub fn move_down(&mut self) {
        self.move_to(self.cursor + 1);
    }

    pub fn page_up(&mut self) {
        self.move_to(self.cursor.saturating_sub(self.page_size()));
    }

    pub fn page_down(&mut self) {
        self.move_to(self.cursor + self.page_size());
    }

    pub fn move_to_top(&mut self) {
        self.move_to(0);
    }

    pub fn move_to_bottom(&mut self) {
        self.move_to(self.entries.len().saturating_sub(1));
    }

    /// Update the viewport size and keep the cursor visible in it.
    pub fn set_viewport_height(&mut self, rows: usize) {
        self.viewport_height = rows.max(1);
        self.ensure_visible();
    }

    /// Move the cursor to `index`, clamped to the listing.
    fn move_to(&mut self, index: usize) {
        self.cursor = index.min(self.entries.len().saturating_sub(1));
        self.ensure_visible();
    }

    fn page_size(&self) -> usize {
        self.viewport_height.max(1)
    }

    fn clamp_cursor(&mut self) {
        self.move_to(self.cursor);
    }

    /// Ensure the cursor row is inside the viewport
    fn ensure_visible(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        }
        if self.cursor >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = self.cursor + 1 - self.viewport_height;
        }
    }

    /// Get entries visible in the current viewport
    pub fn visible_entries(&self) -> &[Entry] {
        let start = self.scroll_offset.min(self.entries.len());
        let end = (self.scroll_offset + self.viewport_height).min(self.entries.len());
        &self.entries[start..end]
    }

    /// Check if there are more entries above the viewport
    pub fn has_more_above(&self) -> bool {
        self.scroll_offset > 0
    }

    /// Check if there are more entries below the viewport
    pub fn has_more_below(&self) -> bool {
        self.scroll_offset + self.viewport_height < self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Entry> {
        (0..count)
            .map(|i| Entry::file(format!("file{}.txt", i), format!("/p/file{}.txt", i)))
            .collect()
    }

    #[test]
    fn test_move_does_not_wrap() {
        let mut state = PickerState::new("/p", numbered(3));
        state.move_up();
        assert_eq!(state.cursor, 0);

        state.move_down();
        state.move_down();
        state.move_down();
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_moves_on_empty_listing_stay_at_zero() {
        let mut state = PickerState::new("/p", vec![]);
        state.move_down();
        state.page_down();
        state.move_to_bottom();
        assert_eq!(state.cursor, 0);
        assert!(state.highlighted().is_none());
    }

    #[test]
    fn test_page_and_jump() {
        let mut state = PickerState::new("/p", numbered(25));
        state.page_down();
        assert_eq!(state.cursor, DEFAULT_VIEWPORT_ROWS);

        state.move_to_bottom();
        assert_eq!(state.cursor, 24);
        assert_eq!(state.scroll_offset, 24 + 1 - DEFAULT_VIEWPORT_ROWS);

        state.page_up();
        assert_eq!(state.cursor, 24 - DEFAULT_VIEWPORT_ROWS);

        state.move_to_top();
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_scroll_visibility() {
        let mut state = PickerState::new("/p", numbered(20));
        assert!(!state.has_more_above());
        assert!(state.has_more_below());

        for _ in 0..19 {
            state.move_down();
        }

        assert!(state.has_more_above());
        assert!(!state.has_more_below());
        assert_eq!(state.visible_entries().len(), DEFAULT_VIEWPORT_ROWS);
        assert_eq!(state.visible_entries().last().unwrap().name, "file19.txt");
    }

    #[test]
    fn test_push_and_pop_restore_cursor() {
        let mut state = PickerState::new("/p", numbered(5));
        state.move_down();
        state.move_down();

        state.push_dir(PathBuf::from("/p/sub"), numbered(2));
        assert_eq!(state.cursor, 0);
        assert_eq!(state.history.len(), 1);

        state.pop_dir(PathBuf::from("/p"), numbered(5));
        assert_eq!(state.cursor, 2);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_pop_clamps_to_shorter_listing() {
        let mut state = PickerState::new("/p", numbered(5));
        state.move_to_bottom();
        state.push_dir(PathBuf::from("/p/sub"), vec![]);

        state.pop_dir(PathBuf::from("/p"), numbered(2));
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_pop_without_history_lands_on_previous_dir() {
        let mut state = PickerState::new("/p/sub", vec![]);
        let parent = vec![
            Entry::dir("alpha", "/p/alpha"),
            Entry::dir("sub", "/p/sub"),
            Entry::file("z.txt", "/p/z.txt"),
        ];
        state.pop_dir(PathBuf::from("/p"), parent);
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_replace_entries_clamps() {
        let mut state = PickerState::new("/p", numbered(5));
        state.move_to_bottom();
        state.replace_entries(numbered(3));
        assert_eq!(state.cursor, 2);

        state.replace_entries(vec![]);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.scroll_offset, 0);
    }

    #[test]
    fn test_parent_dir() {
        assert_eq!(
            PickerState::new("/p/sub", vec![]).parent_dir(),
            Some(Path::new("/p"))
        );
        assert_eq!(PickerState::new("/", vec![]).parent_dir(), None);
        assert_eq!(PickerState::new("docs", vec![]).parent_dir(), None);
    }

    #[test]
    fn test_viewport_resize_keeps_cursor_visible() {
        let mut state = PickerState::new("/p", numbered(30));
        for _ in 0..9 {
            state.move_down();
        }
        state.set_viewport_height(4);
        assert!(state.cursor >= state.scroll_offset);
        assert!(state.cursor < state.scroll_offset + 4);
    }
}
