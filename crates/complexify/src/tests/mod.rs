//! Tests for the terminal client.
//!
//! Organized by topic:
//! - `controller` - the request lifecycle against a scripted backend
//! - `editor` - the editing buffer
//! - `worker` - job/outcome plumbing
//! - `logging` - log file setup and rollover

mod controller;
mod editor;
mod logging;
mod worker;
