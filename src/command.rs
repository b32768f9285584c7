//! Actions and types used throughout hyprdisplay.
//!
//! This module defines the vocabulary that all components share:
//! [`Action`] describes every operator intent the editor understands,
//! and [`Direction`] / [`MonitorInfo`] provide the supporting data types.

/// Cardinal direction for cursor navigation and monitor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit offset `(dx, dy)` in display-server coordinates.
    ///
    /// The y axis grows downwards, as on every Wayland compositor.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

/// Every action the editor can perform.
///
/// Actions are produced by the key map from raw terminal input and consumed
/// by the [`Editor`](crate::editor::Editor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Navigate the cursor (browsing) or move the selected monitor (moving).
    Go(Direction),

    /// Select or deselect the monitor under the cursor.
    ToggleSelect,

    /// Apply the current layout to the display server.
    Apply,

    /// Copy the generated `hyprctl` command to the system clipboard.
    Copy,

    /// End the session.
    Quit,
}

/// Static information about a monitor as reported by the display server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorInfo {
    /// Unique name the display server uses for this output (e.g. `"DP-1"`).
    pub name: String,
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// X position on the virtual desktop (pixels).
    pub x: i32,
    /// Y position on the virtual desktop (pixels).
    pub y: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_vectors() {
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (1, 0));
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Down.offset(), (0, 1));
    }

    #[test]
    fn action_equality() {
        assert_eq!(Action::Go(Direction::Left), Action::Go(Direction::Left));
        assert_ne!(Action::Go(Direction::Left), Action::Go(Direction::Right));
        assert_ne!(Action::Apply, Action::Copy);
    }

    #[test]
    fn monitor_info_creation() {
        let m = MonitorInfo {
            name: "DP-1".into(),
            width: 2560,
            height: 1440,
            x: -2560,
            y: 0,
        };
        assert_eq!(m.name, "DP-1");
        assert_eq!(m.x, -2560);
    }
}
