//! Braindump - save a note under an AI-suggested filename
//!
//! Reads a note from stdin, asks a chat-completion service for a filename,
//! lets the user pick a directory in a full-screen picker and writes the
//! note there. This library exposes the modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod models;
pub mod persist;
pub mod picker;
pub mod state;
pub mod suggest;
pub mod terminal;
pub mod traits;
pub mod ui;
