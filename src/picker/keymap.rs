//! Key bindings for the directory picker.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::events::{Movement, PickerEvent};

/// Map a terminal key press to a picker event.
///
/// Releases and repeats are ignored, as are keys without a binding.
pub fn translate_key(key: KeyEvent) -> Option<PickerEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(PickerEvent::Quit),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Char('q') => PickerEvent::Quit,
        KeyCode::Up | KeyCode::Char('k') => PickerEvent::Navigate(Movement::Up),
        KeyCode::Down | KeyCode::Char('j') => PickerEvent::Navigate(Movement::Down),
        KeyCode::PageUp | KeyCode::Char('K') => PickerEvent::Navigate(Movement::PageUp),
        KeyCode::PageDown | KeyCode::Char('J') => PickerEvent::Navigate(Movement::PageDown),
        KeyCode::Home | KeyCode::Char('g') => PickerEvent::Navigate(Movement::Top),
        KeyCode::End | KeyCode::Char('G') => PickerEvent::Navigate(Movement::Bottom),
        KeyCode::Right | KeyCode::Char('l') => PickerEvent::Open,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace | KeyCode::Esc => {
            PickerEvent::Back
        }
        KeyCode::Enter => PickerEvent::Confirm,
        _ => return None,
    };
    Some(event)
}
