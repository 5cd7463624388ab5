//! Directory configuration and loaders.

use std::env;

use crate::cache;
use crate::types::UserId;

pub const DEFAULT_BAN_REASON: &str = "Violation of terms of service";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Directory behaviour knobs.
#[derive(Clone, Debug)]
pub struct DirectoryConfig {
    /// Reason stored when a ban is issued with a blank reason.
    pub default_ban_reason: String,
    /// Notification text when a failed mutation carries no remote message.
    pub generic_error_message: String,
    /// Caller identity for locally signed-in sessions.
    pub caller_id: Option<UserId>,
    /// Distinct search terms kept in the query cache.
    pub cache_capacity: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            default_ban_reason: DEFAULT_BAN_REASON.to_string(),
            generic_error_message: GENERIC_ERROR_MESSAGE.to_string(),
            caller_id: None,
            cache_capacity: cache::DEFAULT_CAPACITY,
        }
    }
}

impl DirectoryConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DIRECTORY_DEFAULT_BAN_REASON` - Reason used for blank ban requests
    /// - `DIRECTORY_GENERIC_ERROR` - Fallback failure notification text
    /// - `DIRECTORY_CALLER_ID` - User id of the signed-in admin
    /// - `DIRECTORY_CACHE_CAPACITY` - Search terms kept in the cache (default: 32)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(reason) = read_env_text("DIRECTORY_DEFAULT_BAN_REASON") {
            config.default_ban_reason = reason;
        }
        if let Some(message) = read_env_text("DIRECTORY_GENERIC_ERROR") {
            config.generic_error_message = message;
        }
        if let Some(caller) = read_env_text("DIRECTORY_CALLER_ID") {
            config.caller_id = Some(UserId::new(caller));
        }
        if let Some(capacity) =
            read_env_text("DIRECTORY_CACHE_CAPACITY").and_then(|raw| raw.parse::<usize>().ok())
        {
            config.cache_capacity = capacity.max(1);
        }

        config
    }

    /// Reason to store for a ban request.
    pub fn ban_reason(&self, requested: &str) -> String {
        let trimmed = requested.trim();
        if trimmed.is_empty() {
            self.default_ban_reason.clone()
        } else {
            trimmed.to_string()
        }
    }
}

fn read_env_text(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_reason_uses_default() {
        let config = DirectoryConfig::default();
        assert_eq!(config.ban_reason(""), DEFAULT_BAN_REASON);
        assert_eq!(config.ban_reason("   "), DEFAULT_BAN_REASON);
        assert_eq!(config.ban_reason(" spam "), "spam");
    }
}
