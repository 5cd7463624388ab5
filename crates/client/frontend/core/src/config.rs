//! Frontend configuration structures and loaders.
//!
//! UI settings shared across frontend implementations (CLI, GUI, etc.).

use std::env;

use crate::view_model::Density;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub density: Density,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(density: Density, messages: MessageConfig) -> Self {
        Self { density, messages }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BOARD_DENSITY` - `comfortable` or `compact`; booleans select compact (default: comfortable)
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(density) = read_density("BOARD_DENSITY") {
            config.density = density;
        }

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_density(key: &str) -> Option<Density> {
    let raw = env::var(key).ok()?;
    parse_density(&raw)
}

fn parse_density(raw: &str) -> Option<Density> {
    let raw = raw.trim();
    if let Ok(density) = raw.parse() {
        return Some(density);
    }
    let compact = match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => return None,
    };
    Some(Density::from_compact(compact))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn density_accepts_names_and_booleans() {
        assert_eq!(parse_density("compact"), Some(Density::Compact));
        assert_eq!(parse_density(" Comfortable "), Some(Density::Comfortable));
        assert_eq!(parse_density("on"), Some(Density::Compact));
        assert_eq!(parse_density("0"), Some(Density::Comfortable));
        assert_eq!(parse_density("tiny"), None);
    }
}
