//! Client builder with dependency injection pattern.

use std::sync::Arc;

use crate::{Client, Frontend};
use anyhow::{Context, Result};
use board_core::BoardSnapshot;
use client_directory_core::UserDirectory;
use client_frontend_core::SharedMessageLog;

/// Builder for constructing a Client with proper validation.
///
/// Directory, message log, and frontend are required; the board defaults to
/// an empty snapshot, which renders the loading placeholder.
#[derive(Default)]
pub struct ClientBuilder {
    directory: Option<Arc<UserDirectory>>,
    messages: Option<SharedMessageLog>,
    board: Option<BoardSnapshot>,
    frontend: Option<Box<dyn Frontend>>,
}

impl ClientBuilder {
    /// Create a new ClientBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user directory (required).
    pub fn directory(mut self, directory: Arc<UserDirectory>) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Set the message log (required).
    ///
    /// Pass the same log the directory notifies into.
    pub fn messages(mut self, messages: SharedMessageLog) -> Self {
        self.messages = Some(messages);
        self
    }

    pub fn board(mut self, board: BoardSnapshot) -> Self {
        self.board = Some(board);
        self
    }

    /// Set the frontend (required).
    pub fn frontend(mut self, frontend: impl Frontend + 'static) -> Self {
        self.frontend = Some(Box::new(frontend));
        self
    }

    /// Build the Client.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory, message log, or frontend is not set.
    pub fn build(self) -> Result<Client> {
        let directory = self
            .directory
            .context("Directory is required. Use .directory() to set it.")?;

        let messages = self
            .messages
            .context("Message log is required. Use .messages() to set it.")?;

        let frontend = self
            .frontend
            .context("Frontend is required. Use .frontend() to set it.")?;

        Ok(Client {
            directory,
            messages,
            board: self.board.unwrap_or_default(),
            frontend,
        })
    }
}
