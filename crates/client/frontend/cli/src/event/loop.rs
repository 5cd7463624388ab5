//! Event loop orchestrating user input, directory queries, and rendering.

use anyhow::Result;
use client_frontend_core::{
    FrontendConfig, FrontendContext,
    view_model::BoardView,
};
use tokio::time::{self, Duration, Instant};

use crate::{
    config::CliConfig,
    input::InputHandler,
    presentation::{terminal::Tui, widgets::directory::DirectoryPanel},
    state::AppState,
};

const FRAME_INTERVAL_MS: u64 = 16;
/// How long snapshot animations stay on screen before they are cleared.
const ANIMATION_TTL_MS: u64 = 1500;

/// Event loop owning the presentation state of one CLI session.
pub struct EventLoop {
    pub(crate) context: FrontendContext,
    pub(crate) frontend_config: FrontendConfig,
    pub(crate) cli_config: CliConfig,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    /// Rebuilt from `context.board` whenever the board UI state changes.
    pub(crate) board_view: BoardView,
    pub(crate) directory_panel: DirectoryPanel,
    pub(crate) animation_deadline: Option<Instant>,
}

impl EventLoop {
    pub fn new(context: FrontendContext, frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        let board_view = BoardView::build(
            context.board.grid.as_ref(),
            &context.board.ui,
            frontend_config.density,
        );
        let animation_deadline = (!context.board.ui.animations.is_empty())
            .then(|| Instant::now() + Duration::from_millis(ANIMATION_TTL_MS));

        Self {
            context,
            frontend_config,
            cli_config,
            input: InputHandler::new(),
            app_state: AppState::new(),
            board_view,
            directory_panel: DirectoryPanel::Loading,
            animation_deadline,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;
        self.refresh_directory().await;
        self.render(terminal)?;

        let mut frames = time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frames.set_missed_tick_behavior(time::MissedTickBehavior::Skip);

        loop {
            frames.tick().await;
            if self.handle_input_tick(terminal).await? {
                break;
            }
            if self.expire_animations() {
                self.render(terminal)?;
            }
        }

        Ok(())
    }

    /// Re-derives the board view after a UI state change.
    pub(crate) fn rebuild_board(&mut self) {
        self.board_view = BoardView::build(
            self.context.board.grid.as_ref(),
            &self.context.board.ui,
            self.frontend_config.density,
        );
    }

    /// Clears snapshot animations once their time is up.
    fn expire_animations(&mut self) -> bool {
        match self.animation_deadline {
            Some(deadline) if Instant::now() >= deadline => {
                self.animation_deadline = None;
                self.context.board.ui.animations.clear();
                self.rebuild_board();
                true
            }
            _ => false,
        }
    }
}
