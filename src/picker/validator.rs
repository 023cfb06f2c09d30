//! Selection eligibility.
//!
//! Decides whether a highlighted entry may be chosen as the destination
//! directory. Pure functions, no state.

use crate::models::Entry;

/// Outcome of checking a highlighted entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    /// A directory that can be selected
    EligibleDirectory,
    /// A regular file; only directories can be chosen
    IneligibleFile,
    /// An entry the provider marked as disabled
    DisabledEntry,
}

/// Classify an entry. A disabled entry is rejected as such even when it is a
/// directory.
pub fn classify(entry: &Entry) -> Eligibility {
    if entry.disabled {
        Eligibility::DisabledEntry
    } else if entry.is_dir {
        Eligibility::EligibleDirectory
    } else {
        Eligibility::IneligibleFile
    }
}

/// True iff the entry is a directory and not disabled.
pub fn is_eligible(entry: &Entry) -> bool {
    classify(entry) == Eligibility::EligibleDirectory
}
