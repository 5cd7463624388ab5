//! Trait describing a runnable client front-end.
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use board_core::BoardSnapshot;
use client_directory_core::UserDirectory;

use crate::message::SharedMessageLog;

/// Everything a frontend needs to drive one session.
///
/// Frontends do NOT own the directory's backend; they receive the
/// orchestrator and the message log the orchestrator notifies into.
#[derive(Clone)]
pub struct FrontendContext {
    pub directory: Arc<UserDirectory>,
    pub messages: SharedMessageLog,
    pub board: BoardSnapshot,
}

/// Frontend abstraction for UI layers.
///
/// # Implementations
///
/// - `CliFrontend`: Terminal-based UI (ratatui + crossterm)
#[async_trait]
pub trait Frontend: Send {
    /// Run the frontend event loop until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend encounters a fatal error.
    async fn run(&mut self, context: FrontendContext) -> Result<()>;
}
