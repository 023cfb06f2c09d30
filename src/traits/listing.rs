//! Directory listing trait abstraction.
//!
//! The picker never touches the filesystem directly; it asks a
//! [`DirectoryProvider`] for a snapshot of a directory and renders what it
//! gets back. This keeps the controller testable with in-memory listings.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Entry;

/// Directory listing errors.
#[derive(Debug, Error)]
pub enum ListingError {
    /// The directory does not exist
    #[error("{} does not exist", .path.display())]
    NotFound { path: PathBuf },

    /// The directory exists but cannot be read
    #[error("{} could not be read: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    /// Classify an I/O error raised while listing `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ListingError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ListingError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// The directory the failed listing was for.
    pub fn path(&self) -> &Path {
        match self {
            ListingError::NotFound { path } | ListingError::Unreadable { path, .. } => path,
        }
    }
}

/// Trait for producing ordered directory listings.
///
/// Implementations decide ordering, hidden-file policy and which entries are
/// disabled. The picker displays entries in the order returned.
pub trait DirectoryProvider {
    /// List the entries of `path`.
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListingError>;
}

impl<P: DirectoryProvider + ?Sized> DirectoryProvider for &P {
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListingError> {
        (**self).list(path)
    }
}

impl<P: DirectoryProvider + ?Sized> DirectoryProvider for Box<P> {
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListingError> {
        (**self).list(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_not_found() {
        let err = ListingError::from_io(
            Path::new("/missing"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(matches!(err, ListingError::NotFound { .. }));
        assert_eq!(err.to_string(), "/missing does not exist");
    }

    #[test]
    fn test_from_io_permission_denied() {
        let err = ListingError::from_io(
            Path::new("/root"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ListingError::Unreadable { .. }));
        assert_eq!(err.path(), Path::new("/root"));
        assert!(err.to_string().starts_with("/root could not be read"));
    }
}
