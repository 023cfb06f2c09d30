//! The picker event loop.
//!
//! One cooperative loop over two sources: terminal input and an internal
//! queue of deferred events. Error expiry is the only deferred event; a
//! spawned sleep pushes `ErrorExpired(id)` onto the queue and the loop hands
//! it to the controller like any key press.

use std::io;
use std::path::PathBuf;

use color_eyre::Result;
use crossterm::event::Event;
use futures::{Stream, StreamExt};
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use crate::picker::{translate_key, PickerCommand, PickerController, PickerEvent};
use crate::traits::DirectoryProvider;
use crate::ui::{listing_rows, render_picker, RenderOptions};

/// How a picker session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// The user confirmed this directory
    Selected(PathBuf),
    /// The user quit, or input ended, without choosing
    Cancelled,
}

/// Run the picker until the user confirms a directory or quits.
///
/// `input` is normally a crossterm `EventStream`; tests pass a scripted
/// stream. The controller is borrowed so callers can inspect its final state.
pub async fn run_picker<B, P, S>(
    terminal: &mut Terminal<B>,
    controller: &mut PickerController<P>,
    options: RenderOptions,
    mut input: S,
) -> Result<PickerOutcome>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    P: DirectoryProvider,
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel::<PickerEvent>();

    tracing::info!(dir = %controller.state().current_dir.display(), "Picker started");

    let rows = listing_rows(terminal.size()?.height);
    for event in [PickerEvent::Resize { rows }, PickerEvent::Refresh] {
        let commands = controller.handle_event(event);
        if let Some(outcome) = perform(commands, &timer_tx) {
            return Ok(outcome);
        }
    }

    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| render_picker(f, controller, options))?;
            needs_redraw = false;
        }

        let event = tokio::select! {
            input_event = input.next() => match input_event {
                Some(Ok(Event::Key(key))) => match translate_key(key) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Ok(Event::Resize(_, height))) => PickerEvent::Resize {
                    rows: listing_rows(height),
                },
                Some(Ok(_)) => continue,
                Some(Err(err)) => return Err(err.into()),
                None => {
                    tracing::info!("Input closed, leaving picker");
                    return Ok(PickerOutcome::Cancelled);
                }
            },
            Some(event) = timer_rx.recv() => event,
        };

        let commands = controller.handle_event(event);
        needs_redraw = true;

        if let Some(outcome) = perform(commands, &timer_tx) {
            if matches!(outcome, PickerOutcome::Selected(_)) {
                // Leave the confirmed selection on screen for the final frame.
                terminal.draw(|f| render_picker(f, controller, options))?;
            }
            return Ok(outcome);
        }
    }
}

/// Carry out controller commands. Returns the outcome once the session ends.
fn perform(
    commands: Vec<PickerCommand>,
    timer_tx: &mpsc::UnboundedSender<PickerEvent>,
) -> Option<PickerOutcome> {
    for command in commands {
        match command {
            PickerCommand::Quit => return Some(PickerOutcome::Cancelled),
            PickerCommand::Select(path) => return Some(PickerOutcome::Selected(path)),
            PickerCommand::ClearErrorAfter { id, delay } => {
                let tx = timer_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    // The loop may already be gone; nothing left to clear then.
                    let _ = tx.send(PickerEvent::ErrorExpired(id));
                });
            }
        }
    }
    None
}
