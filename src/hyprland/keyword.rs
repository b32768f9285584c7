//! Generation of `hyprctl keyword monitor` commands from a [`Layout`].
//!
//! The output is a single shell command line: one `hyprctl` invocation per
//! monitor, chained with `&&` so the first failure stops the rest.
//!
//! ```text
//! hyprctl keyword monitor 'eDP-1,highres,0,0,1' && hyprctl keyword monitor 'DP-2,highres,1920,0,1'
//! ```

use crate::layout::{Layout, Monitor};
use serde::{Deserialize, Serialize};

/// Separator placed between per-monitor subcommands.
pub const AND_SEPARATOR: &str = " && ";

/// Fixed parts of every monitor rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Resolution descriptor; `highres` lets Hyprland pick the best mode.
    pub resolution: String,
    /// Output scale factor.
    pub scale: f64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            resolution: "highres".into(),
            scale: 1.0,
        }
    }
}

/// Build the subcommand that places a single monitor at its current origin.
pub fn monitor_rule(monitor: &Monitor, rule: &RuleConfig) -> String {
    format!(
        "hyprctl keyword monitor '{},{},{},{},{}'",
        monitor.name, rule.resolution, monitor.x, monitor.y, rule.scale
    )
}

/// Build the full command line for `layout`.
///
/// Only monitor names and positions influence the result.  An empty layout
/// produces an empty string.
pub fn layout_command(layout: &Layout, rule: &RuleConfig) -> String {
    layout
        .monitors()
        .iter()
        .map(|m| monitor_rule(m, rule))
        .collect::<Vec<_>>()
        .join(AND_SEPARATOR)
}
