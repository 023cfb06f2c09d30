//! Writing the note to disk.

use std::fs::{DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[cfg(unix)]
const DIR_MODE: u32 = 0o770;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write `contents` to `dir/filename`, creating `dir` if needed.
///
/// An existing file with the same name is overwritten. Returns the path of
/// the written file.
pub fn save_note(dir: &Path, filename: &str, contents: &[u8]) -> Result<PathBuf, PersistError> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
        .create(dir)
        .map_err(|source| PersistError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

    let path = dir.join(filename);
    write_file(&path, contents).map_err(|source| PersistError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), bytes = contents.len(), "Note saved");
    Ok(path)
}

fn write_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}
