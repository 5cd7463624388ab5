//! CLI frontend implementing the `Frontend` trait.
use anyhow::Result;
use async_trait::async_trait;

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::presentation::terminal;
use client_frontend_core::{Frontend, FrontendConfig, FrontendContext, message::MessageLevel};

/// Terminal-based frontend (ratatui + crossterm).
///
/// Owns only presentation configuration; the directory and board arrive
/// through the [`FrontendContext`] passed to [`Frontend::run`].
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
        }
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, context: FrontendContext) -> Result<()> {
        tracing::info!("CLI frontend starting...");

        context
            .messages
            .push_level("Welcome. Press Tab to switch panels.", MessageLevel::Info);

        let event_loop = EventLoop::new(context, self.frontend_config.clone(), self.cli_config.clone());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        event_loop.run(&mut terminal).await?;

        terminal::restore()?;
        tracing::info!("CLI frontend exiting");

        Ok(())
    }
}
