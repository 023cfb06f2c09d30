//! Filesystem-backed directory provider.

use std::fs;
use std::path::Path;

use crate::models::Entry;
use crate::traits::{DirectoryProvider, ListingError};

/// Lists real directories.
///
/// Entries are sorted directories first, then by case-insensitive name.
/// Symlinks are resolved so a link to a directory behaves like one. A
/// directory the current user cannot create files in is listed as disabled.
#[derive(Debug, Clone, Default)]
pub struct FsDirectoryProvider {
    show_hidden: bool,
}

impl FsDirectoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Include dotfiles in listings.
    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    fn is_hidden(name: &str) -> bool {
        name.starts_with('.')
    }
}

impl DirectoryProvider for FsDirectoryProvider {
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListingError> {
        let read_dir = fs::read_dir(path).map_err(|e| ListingError::from_io(path, e))?;

        let mut entries = Vec::new();
        for dir_entry in read_dir {
            let dir_entry = dir_entry.map_err(|e| ListingError::from_io(path, e))?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if !self.show_hidden && Self::is_hidden(&name) {
                continue;
            }

            let full_path = dir_entry.path();
            // Dangling symlinks have no target metadata; show them as plain files.
            let entry = match fs::metadata(&full_path) {
                Ok(meta) => {
                    let entry = if meta.is_dir() {
                        let writable = is_writable_dir(&full_path, &meta);
                        Entry::dir(name, full_path).with_disabled(!writable)
                    } else {
                        Entry::file(name, full_path).with_size(meta.len())
                    };
                    match permission_bits(&meta) {
                        Some(mode) => entry.with_mode(mode),
                        None => entry,
                    }
                }
                Err(_) => Entry::file(name, full_path),
            };
            entries.push(entry);
        }

        entries.sort_by(|a, b| {
            b.is_dir
                .cmp(&a.is_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(entries)
    }
}

/// Whether a file could be created in `path` by this process.
#[cfg(unix)]
fn is_writable_dir(path: &Path, _meta: &fs::Metadata) -> bool {
    use rustix::fs::{access, Access};

    access(path, Access::WRITE_OK | Access::EXEC_OK).is_ok()
}

#[cfg(not(unix))]
fn is_writable_dir(_path: &Path, meta: &fs::Metadata) -> bool {
    !meta.permissions().readonly()
}

#[cfg(unix)]
fn permission_bits(meta: &fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;

    Some(meta.permissions().mode() & 0o777)
}

#[cfg(not(unix))]
fn permission_bits(_meta: &fs::Metadata) -> Option<u32> {
    None
}
