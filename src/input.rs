//! Reading the note from standard input.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Printed before reading
pub const PROMPT: &str = "Enter brain dump:";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input received")]
    Empty,

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Read one line from `reader`, without its line terminator.
///
/// Bytes are returned as read, so input in a non-UTF-8 encoding is kept
/// intact. An empty line is accepted; end of input before any byte is
/// [`InputError::Empty`].
pub fn read_note<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, InputError> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Err(InputError::Empty);
    }

    if line.ends_with(b"\n") {
        line.pop();
        if line.ends_with(b"\r") {
            line.pop();
        }
    }
    Ok(line)
}

/// Print the prompt to `out` and read the note from `reader`.
pub fn prompt_for_note<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
) -> Result<Vec<u8>, InputError> {
    writeln!(out, "{}", PROMPT)?;
    out.flush()?;
    let note = read_note(reader)?;
    tracing::debug!(bytes = note.len(), "Read note");
    Ok(note)
}
