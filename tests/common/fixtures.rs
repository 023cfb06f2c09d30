//! Canned directory listings.

use std::fs;
use std::path::Path;

use braindump::adapters::mock::InMemoryDirectories;
use braindump::models::Entry;

/// `/home` holding `docs/`, `readme.txt` and a disabled `secret/`.
pub fn home_listing() -> Vec<Entry> {
    vec![
        Entry::dir("docs", "/home/docs"),
        Entry::file("readme.txt", "/home/readme.txt").with_size(120),
        Entry::dir("secret", "/home/secret").with_disabled(true),
    ]
}

/// Provider serving [`home_listing`] at `/home` and an empty `/home/docs`.
pub fn home_provider() -> InMemoryDirectories {
    InMemoryDirectories::new()
        .with_dir("/", vec![Entry::dir("home", "/home")])
        .with_dir("/home", home_listing())
        .with_dir("/home/docs", vec![])
}

/// Create `notes/`, `projects/drafts/` and `todo.txt` under `root`.
pub fn populate_tree(root: &Path) {
    fs::create_dir_all(root.join("notes")).unwrap();
    fs::create_dir_all(root.join("projects").join("drafts")).unwrap();
    fs::write(root.join("todo.txt"), "ship it").unwrap();
}
