//! Mock implementations for testing.
//!
//! Test doubles for the trait abstractions, so the picker and the suggester
//! can be exercised without a network or a real filesystem.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`InMemoryDirectories`] - canned directory listings

pub mod http;
pub mod listing;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use listing::InMemoryDirectories;
