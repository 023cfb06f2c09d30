//! In-memory directory provider for testing.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::Entry;
use crate::traits::{DirectoryProvider, ListingError};

/// Directory provider backed by a map of canned listings.
///
/// Paths that were never registered are reported as not found; paths marked
/// with [`InMemoryDirectories::with_unreadable`] fail with permission denied.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectories {
    listings: HashMap<PathBuf, Vec<Entry>>,
    unreadable: HashSet<PathBuf>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl InMemoryDirectories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the listing returned for `path`.
    pub fn with_dir(mut self, path: impl Into<PathBuf>, entries: Vec<Entry>) -> Self {
        self.listings.insert(path.into(), entries);
        self
    }

    /// Make listings of `path` fail.
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>) -> Self {
        self.unreadable.insert(path.into());
        self
    }

    /// Paths listed so far, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl DirectoryProvider for InMemoryDirectories {
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListingError> {
        self.calls.lock().unwrap().push(path.to_path_buf());

        if self.unreadable.contains(path) {
            return Err(ListingError::from_io(
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }

        self.listings.get(path).cloned().ok_or_else(|| {
            ListingError::from_io(path, io::Error::new(io::ErrorKind::NotFound, "not found"))
        })
    }
}
