//! Tracing subscriber setup.
//!
//! Logs go to a file, never to the terminal: stdout belongs to the picker
//! while it runs and to the prompts around it otherwise.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Variable holding the filter directive (e.g. `debug`, `braindump=trace`)
pub const ENV_LOG: &str = "BRAINDUMP_LOG";

const DEFAULT_LEVEL: &str = "info";
const LOG_FILE: &str = "braindump.log";

/// Directory holding the log file: `<data dir>/braindump`.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("braindump"))
}

/// Filter from [`ENV_LOG`], falling back to `info`.
///
/// Read when logging starts, so a `.env` file must be loaded before then.
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber, appending to the log file.
///
/// Returns the log file path, or `None` if logging could not be set up.
/// Failures are silent; the program works the same without logs.
pub fn init_logging() -> Option<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    tracing_subscriber::registry()
        .with(log_filter())
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .ok()?;

    Some(path)
}
