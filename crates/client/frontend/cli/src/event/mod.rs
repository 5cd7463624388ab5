//! Event handling for CLI client.
//!
//! This module contains the event loop orchestrator that coordinates user
//! input, directory queries, and UI updates.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
