//! Running a picker session against a terminal.

mod event_loop;

pub use event_loop::{run_picker, PickerOutcome};
