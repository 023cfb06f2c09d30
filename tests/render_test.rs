//! Full-frame rendering of the picker.

mod common;

use braindump::models::Entry;
use braindump::picker::{Movement, PickerController, PickerEvent};
use braindump::ui::{render_picker, RenderOptions, EMPTY_LISTING, PROMPT};
use common::{home_listing, home_provider, screen_lines, test_terminal};

fn draw(
    controller: &PickerController<braindump::adapters::mock::InMemoryDirectories>,
    options: RenderOptions,
    width: u16,
    height: u16,
) -> Vec<String> {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| render_picker(frame, controller, options))
        .unwrap();
    screen_lines(&terminal)
}

#[test]
fn test_initial_frame() {
    let controller = PickerController::with_entries("/home", home_listing(), home_provider());
    let lines = draw(&controller, RenderOptions::default(), 60, 12);

    assert_eq!(lines[0], PROMPT);
    assert_eq!(lines[1], "  /home");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "› docs/");
    assert!(lines[4].starts_with("  readme.txt"));
    assert!(lines[4].ends_with("120 B"));
    assert_eq!(lines[5], "  secret/");
    assert!(lines[7].contains("Enter select"));
}

#[test]
fn test_error_replaces_prompt() {
    let mut controller =
        PickerController::with_entries("/home", home_listing(), home_provider());
    controller.handle_event(PickerEvent::Navigate(Movement::Bottom));
    controller.handle_event(PickerEvent::Confirm);

    let lines = draw(&controller, RenderOptions::default(), 60, 12);
    assert_eq!(lines[0], "/home/secret is not valid.");
    assert!(lines[5].starts_with("› secret/"));
}

#[test]
fn test_empty_directory() {
    let controller = PickerController::with_entries("/home/docs", vec![], home_provider());
    let lines = draw(&controller, RenderOptions::default(), 60, 12);
    assert_eq!(lines[3], format!("  {}", EMPTY_LISTING));
}

#[test]
fn test_permission_column() {
    let entries = vec![
        Entry::dir("docs", "/home/docs").with_mode(0o755),
        Entry::file("notes.txt", "/home/notes.txt")
            .with_mode(0o644)
            .with_size(10),
    ];
    let controller = PickerController::with_entries("/home", entries, home_provider());
    let options = RenderOptions {
        show_permissions: true,
    };

    let lines = draw(&controller, options, 60, 12);
    assert_eq!(lines[3], "› drwxr-xr-x docs/");
    assert!(lines[4].starts_with("  -rw-r--r-- notes.txt"));
}

#[test]
fn test_long_listing_scrolls_with_cursor() {
    let entries: Vec<Entry> = (0..40)
        .map(|i| Entry::dir(format!("dir{:02}", i), format!("/big/dir{:02}", i)))
        .collect();
    let mut controller = PickerController::with_entries("/big", entries, home_provider());
    // 12 rows tall leaves 5 for the listing
    controller.handle_event(PickerEvent::Resize { rows: 5 });
    for _ in 0..7 {
        controller.handle_event(PickerEvent::Navigate(Movement::Down));
    }

    let lines = draw(&controller, RenderOptions::default(), 60, 12);
    assert_eq!(lines[3], "  + 3 more above");
    assert_eq!(lines[4], "  dir03/");
    assert_eq!(lines[8], "› dir07/");
    assert_eq!(lines[9], "  + 32 more below");
}

#[test]
fn test_narrow_terminal_truncates_names() {
    let entries = vec![Entry::dir(
        "an-extremely-long-directory-name-that-does-not-fit",
        "/home/x",
    )];
    let controller = PickerController::with_entries("/home", entries, home_provider());
    let lines = draw(&controller, RenderOptions::default(), 20, 10);
    assert!(lines[3].ends_with('…'));
    assert!(lines[3].chars().count() <= 20);
}
