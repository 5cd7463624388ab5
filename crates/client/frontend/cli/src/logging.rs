//! File logging for the terminal UI.
//!
//! The TUI owns stdout/stderr, so tracing output goes only to a per-session
//! file under the platform cache directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const APP_NAME: &str = "puzzle";
const LOG_FILE: &str = "client.log";

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/puzzle/logs`
/// - Linux: `~/.cache/puzzle/logs` (or `$XDG_CACHE_HOME/puzzle/logs`)
/// - Windows: `%LOCALAPPDATA%\puzzle\logs`
/// - Fallback: `/tmp/puzzle/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join(APP_NAME))
        .join("logs")
}

/// Session name used when none is configured.
pub fn default_session_id() -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

/// Installs the global subscriber writing to `<log_dir>/<session>/client.log`.
///
/// Keep the returned guard alive for the whole session; dropping it flushes
/// and stops the background writer.
pub fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    let session_id = session_id
        .map(str::to_string)
        .unwrap_or_else(default_session_id);

    let session_log_dir = log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)
        .with_context(|| format!("creating log directory {}", session_log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_dir_ends_in_logs() {
        assert!(log_dir().ends_with("logs"));
    }

    #[test]
    fn default_session_is_timestamped() {
        assert!(default_session_id().starts_with("session_"));
    }
}
