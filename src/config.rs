//! Application configuration.
//!
//! The configuration is read from
//! `$XDG_CONFIG_HOME/hyprdisplay/config.json` at startup.  The file is
//! optional and every key inside it is optional too.
//!
//! # Example
//!
//! ```json
//! {
//!   "editor": { "move_step": 10 },
//!   "rule": { "resolution": "highres", "scale": 1.0 }
//! }
//! ```

use crate::hyprland::keyword::RuleConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// A minimal `{}` file is valid and all sections fall back to their
/// compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editing behaviour.
    #[serde(default)]
    pub editor: EditorConfig,

    /// Settings baked into every generated `hyprctl keyword monitor` rule.
    #[serde(default)]
    pub rule: RuleConfig,
}

/// Editing behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Distance in display-server pixels a selected monitor travels per
    /// key press.
    pub move_step: i32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { move_step: 10 }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
