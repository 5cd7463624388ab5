//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: Keyboard and mouse input
//! - `board`: Board cursor and click forwarding
//! - `directory`: Directory queries and admin mutations
//! - `rendering`: Terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files.

mod board;
mod directory;
mod input;
mod rendering;
