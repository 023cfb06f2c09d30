//! Common test utilities for integration tests.
//!
//! Fixtures for picker sessions: scripted key input, canned directory
//! listings and helpers to read a rendered `TestBackend` buffer.

#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::io;
use std::pin::Pin;
use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use futures::{stream, Stream, StreamExt};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Boxed terminal input stream as the event loop consumes it.
pub type InputStream = Pin<Box<dyn Stream<Item = io::Result<Event>> + Send>>;

/// A key press event with no modifiers.
pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Input that delivers `events` immediately, then ends.
pub fn keys(events: Vec<Event>) -> InputStream {
    Box::pin(stream::iter(events.into_iter().map(Ok)))
}

/// Input that delivers each event after waiting its delay (relative to the
/// previous event), then ends.
pub fn scripted(steps: Vec<(Duration, Event)>) -> InputStream {
    Box::pin(stream::iter(steps).then(|(delay, event)| async move {
        tokio::time::sleep(delay).await;
        Ok(event)
    }))
}

/// A `TestBackend` terminal of the given size.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

/// Rendered rows of the terminal, trailing spaces trimmed.
pub fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            let row: String = (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect();
            row.trim_end().to_string()
        })
        .collect()
}
