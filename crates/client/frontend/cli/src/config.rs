//! CLI-specific configuration for terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// JSON board snapshot to show instead of the built-in board.
    pub board_file: Option<PathBuf>,
    /// Log session name; a timestamped one is generated when unset.
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8, min: 3)
    /// - `PUZZLE_BOARD_FILE` - Path to a JSON board snapshot
    /// - `PUZZLE_SESSION_ID` - Session name for the log directory
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("CLI_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(UiConfig::MIN_MESSAGE_PANEL_HEIGHT);
        }

        config.board_file = read_env::<PathBuf>("PUZZLE_BOARD_FILE");
        config.session_id = read_env::<String>("PUZZLE_SESSION_ID");

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl UiConfig {
    pub const MIN_MESSAGE_PANEL_HEIGHT: u16 = 3;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let raw = env::var(key).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}
