//! Directory entry model for the directory picker.
//!
//! Represents one row of a directory listing as produced by a
//! [`DirectoryProvider`](crate::traits::DirectoryProvider).

use std::path::PathBuf;

/// A file or directory in a listing snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File or directory name (e.g., "notes")
    pub name: String,
    /// Full path of the entry
    pub path: PathBuf,
    /// True for directories, false for files
    pub is_dir: bool,
    /// Entry is listed but cannot be chosen
    pub disabled: bool,
    /// File size in bytes (None for directories)
    pub size: Option<u64>,
    /// Unix permission bits, when the platform exposes them
    pub mode: Option<u32>,
}

impl Entry {
    /// Create a selectable directory entry.
    pub fn dir(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir: true,
            disabled: false,
            size: None,
            mode: None,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_dir: false,
            disabled: false,
            size: None,
            mode: None,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_mode(mut self, mode: u32) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Format file size for display (e.g., "1.2 KB", "3.4 MB")
    pub fn format_size(&self) -> Option<String> {
        self.size.map(|bytes| {
            if bytes < 1024 {
                format!("{} B", bytes)
            } else if bytes < 1024 * 1024 {
                format!("{:.1} KB", bytes as f64 / 1024.0)
            } else if bytes < 1024 * 1024 * 1024 {
                format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
            } else {
                format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
            }
        })
    }

    /// Render the permission bits as `ls -l` does (e.g., "drwxr-xr-x").
    pub fn format_mode(&self) -> Option<String> {
        self.mode.map(|mode| {
            let mut out = String::with_capacity(10);
            out.push(if self.is_dir { 'd' } else { '-' });
            for shift in [6u32, 3, 0] {
                let bits = (mode >> shift) & 0o7;
                out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
                out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
                out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
            }
            out
        })
    }
}
