//! Puzzle admin client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. The user directory over its store, session, and notifier
//! 2. The board snapshot (from `PUZZLE_BOARD_FILE` or the built-in board)
//! 3. Frontend (UI) - CLI, GUI, etc.
//!
//! # Features
//!
//! - `frontend-cli`: Terminal-based UI (default)

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli, etc.)");
    }

    Ok(())
}

/// Run the CLI frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use std::sync::Arc;

    use client_directory_core::DirectoryConfig;
    use client_frontend_cli::{CliConfig, CliFrontend, FrontendConfig, logging};
    use client_frontend_core::SharedMessageLog;
    use puzzle_client::{Client, demo};

    // 1. Load configuration from environment
    let frontend_config = FrontendConfig::from_env();
    let cli_config = CliConfig::from_env();
    let directory_config = DirectoryConfig::from_env();

    // 2. Setup logging (guard flushes the file writer on exit)
    let _log_guard = logging::setup_logging(cli_config.session_id.as_deref())?;

    tracing::info!("Starting puzzle client");
    tracing::info!("Board density: {}", frontend_config.density);

    // 3. Build directory; its notifications land in the UI message log
    let messages = SharedMessageLog::new(frontend_config.messages.capacity);
    let directory = demo::build_directory(directory_config, Arc::new(messages.clone()));

    // 4. Load board
    let board = match &cli_config.board_file {
        Some(path) => demo::load_board(path)?,
        None => demo::demo_board()?,
    };
    tracing::debug!(grid = board.grid.is_some(), "Board snapshot loaded");

    // 5. Build frontend and client
    let frontend = CliFrontend::new(frontend_config, cli_config);
    let client = Client::builder()
        .directory(directory)
        .messages(messages)
        .board(board)
        .frontend(frontend)
        .build()?;

    tracing::info!("Client assembled, starting...");
    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
