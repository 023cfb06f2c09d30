//! Interactive directory picker.
//!
//! - [`validator`] - which entries may be chosen
//! - [`transient_error`] - the self-clearing error message
//! - [`controller`] - the state machine driving a picker session
//! - [`keymap`] - terminal keys to picker events

pub mod controller;
pub mod events;
pub mod keymap;
pub mod transient_error;
pub mod validator;

pub use controller::PickerController;
pub use events::{Movement, PickerCommand, PickerEvent};
pub use keymap::translate_key;
pub use transient_error::{ErrorId, TransientError, TransientErrorState, ERROR_TIMEOUT};
pub use validator::{classify, is_eligible, Eligibility};
