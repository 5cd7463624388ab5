//! Terminal UI frontend for the puzzle admin client.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives the user directory and board snapshot through a `FrontendContext`
//! - Does NOT own the directory store or session
//! - Draws notifications that the directory pushes into the shared message log

mod app;
mod config;
mod event;
mod input;
pub mod logging;
mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};
pub use presentation::RatatuiTheme;

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
