//! Picking a real directory and saving a note into it.

mod common;

use std::fs;

use braindump::adapters::FsDirectoryProvider;
use braindump::app::{run_picker, PickerOutcome};
use braindump::persist::save_note;
use braindump::picker::PickerController;
use braindump::ui::RenderOptions;
use common::{key, keys, populate_tree, screen_lines, test_terminal};
use crossterm::event::KeyCode;
use tempfile::TempDir;

#[tokio::test]
async fn test_pick_nested_directory_and_save() {
    let tmp = TempDir::new().unwrap();
    populate_tree(tmp.path());

    let mut terminal = test_terminal(60, 14);
    let mut controller = PickerController::new(tmp.path(), FsDirectoryProvider::new());

    // Listing is notes/, projects/, todo.txt; open projects/ and pick drafts/.
    let outcome = run_picker(
        &mut terminal,
        &mut controller,
        RenderOptions::default(),
        keys(vec![
            key(KeyCode::Down),
            key(KeyCode::Right),
            key(KeyCode::Enter),
        ]),
    )
    .await
    .unwrap();

    let drafts = tmp.path().join("projects").join("drafts");
    assert_eq!(outcome, PickerOutcome::Selected(drafts.clone()));

    let path = save_note(&drafts, "idea.txt", b"write the intro").unwrap();
    assert_eq!(path, drafts.join("idea.txt"));
    assert_eq!(fs::read_to_string(path).unwrap(), "write the intro");
}

#[tokio::test]
async fn test_file_rejection_is_shown() {
    let tmp = TempDir::new().unwrap();
    populate_tree(tmp.path());

    let mut terminal = test_terminal(80, 14);
    let mut controller = PickerController::new(tmp.path(), FsDirectoryProvider::new());

    let outcome = run_picker(
        &mut terminal,
        &mut controller,
        RenderOptions::default(),
        keys(vec![key(KeyCode::End), key(KeyCode::Enter)]),
    )
    .await
    .unwrap();

    // Input ran out while the error was up
    assert_eq!(outcome, PickerOutcome::Cancelled);
    let expected = format!("{} is not a directory.", tmp.path().join("todo.txt").display());
    assert_eq!(controller.error_message(), Some(expected.as_str()));
    assert!(screen_lines(&terminal)[0].ends_with("todo.txt is not a directory."));
}

#[tokio::test]
async fn test_missing_start_directory() {
    let tmp = TempDir::new().unwrap();
    let gone = tmp.path().join("gone");

    let mut terminal = test_terminal(80, 14);
    let mut controller = PickerController::new(&gone, FsDirectoryProvider::new());

    run_picker(
        &mut terminal,
        &mut controller,
        RenderOptions::default(),
        keys(vec![key(KeyCode::Enter)]),
    )
    .await
    .unwrap();

    assert!(controller.state().entries.is_empty());
    assert_eq!(
        controller.error_message(),
        Some(format!("{} does not exist.", gone.display()).as_str())
    );
}
