use braindump::adapters::{FsDirectoryProvider, ReqwestHttpClient};
use braindump::app::{run_picker, PickerOutcome};
use braindump::config::{load_dotenv, AppConfig};
use braindump::input::prompt_for_note;
use braindump::logging::init_logging;
use braindump::persist::save_note;
use braindump::picker::PickerController;
use braindump::suggest::FilenameSuggester;
use braindump::terminal::{setup_panic_hook, TerminalManager};
use braindump::ui::RenderOptions;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::EventStream;
use std::io;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    // .env may set the log filter, so it is read before logging starts
    let env_file = load_dotenv();
    let log_path = init_logging();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = ?log_path, "Starting braindump");

    if let Err(ref err) = env_file {
        tracing::error!(error = %err, "Could not load .env");
    }
    let env_file = env_file?;
    tracing::debug!(env_file = ?env_file, "Environment loaded");

    let config = AppConfig::from_env()?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run(config));
    if let Err(ref err) = result {
        tracing::error!(error = %err, "Exiting with error");
    }
    result
}

async fn run(config: AppConfig) -> Result<()> {
    let note = prompt_for_note(&mut io::stdin().lock(), &mut io::stdout())
        .wrap_err("Failed to read input")?;

    let suggester = FilenameSuggester::from_config(ReqwestHttpClient::new(), &config);
    let filename = suggester
        .suggest(&String::from_utf8_lossy(&note))
        .await
        .wrap_err("Failed to get a filename suggestion")?;

    // Relative roots would stop "back" at the working directory.
    let start_dir = std::fs::canonicalize(&config.start_dir).unwrap_or(config.start_dir);
    let provider = FsDirectoryProvider::new().with_show_hidden(config.show_hidden);
    let mut controller = PickerController::new(start_dir, provider);
    let options = RenderOptions {
        show_permissions: config.show_permissions,
    };

    let outcome = {
        let mut manager = TerminalManager::new().wrap_err("Failed to set up the terminal")?;
        let outcome =
            run_picker(manager.terminal(), &mut controller, options, EventStream::new()).await;
        manager.restore();
        outcome?
    };

    let dir = match outcome {
        PickerOutcome::Selected(dir) => dir,
        PickerOutcome::Cancelled => {
            println!("No directory selected, nothing saved.");
            return Ok(());
        }
    };

    println!("\nDirectory selected: {}\n", dir.display());

    let path = save_note(&dir, &filename, &note).wrap_err("Failed to save the note")?;
    println!("New file created: {}\n", path.display());

    Ok(())
}
