//! Trait abstractions for the application's external collaborators.
//!
//! - [`HttpClient`] - HTTP POST used by the filename suggester
//! - [`DirectoryProvider`] - directory listings rendered by the picker

pub mod http;
pub mod listing;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use listing::{DirectoryProvider, ListingError};
