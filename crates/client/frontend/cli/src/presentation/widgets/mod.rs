//! Ratatui widgets composing the terminal UI.
pub mod board;
pub mod directory;
pub mod footer;
pub mod header;
pub mod messages;
