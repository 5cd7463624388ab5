//! Top-level client wiring the user directory, board snapshot, and frontend.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ UserDirectory (store + session + notifier)
//!   ├─→ BoardSnapshot (engine-owned grid and UI state)
//!   └─→ Frontend (UI layer - CLI, GUI, etc.)
//! ```
//!
//! The directory notifies into the same [`SharedMessageLog`] the frontend
//! draws, so mutation outcomes show up in the UI without extra plumbing.

mod builder;
pub mod demo;

pub use builder::ClientBuilder;

// Re-export Frontend trait from client-frontend-core
pub use client_frontend_core::Frontend;

use std::sync::Arc;

use anyhow::Result;
use board_core::BoardSnapshot;
use client_directory_core::UserDirectory;
use client_frontend_core::{FrontendContext, SharedMessageLog};

/// Top-level client container.
///
/// # Lifecycle
///
/// 1. `Client::builder()` collects the directory, board, and frontend
/// 2. `Client::run()` hands them to the frontend (blocking until the user quits)
pub struct Client {
    directory: Arc<UserDirectory>,
    messages: SharedMessageLog,
    board: BoardSnapshot,
    frontend: Box<dyn Frontend>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the frontend until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if frontend execution fails.
    pub async fn run(self) -> Result<()> {
        let context = FrontendContext {
            directory: self.directory,
            messages: self.messages,
            board: self.board,
        };

        let mut frontend = self.frontend;
        frontend.run(context).await
    }
}
