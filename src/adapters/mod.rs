//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`FsDirectoryProvider`] - directory listings from the local filesystem
//!
//! The [`mock`] submodule provides test doubles for both.

pub mod fs_listing;
pub mod mock;
pub mod reqwest_http;

pub use fs_listing::FsDirectoryProvider;
pub use mock::{InMemoryDirectories, MockHttpClient};
pub use reqwest_http::ReqwestHttpClient;
