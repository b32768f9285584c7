//! Monitor layout model.
//!
//! The [`Layout`] struct owns the ordered list of monitors being edited, the
//! cursor, and the editing [`Mode`].  It is the single source of truth for
//! everything that gets rendered or turned into a `hyprctl` command.
//!
//! Selection is not a per-monitor flag: the mode is either
//! [`Mode::Browsing`] or [`Mode::Moving`] with the index of the monitor being
//! moved, and that index is always the cursor.  The cursor therefore cannot
//! move while a monitor is selected.

use crate::command::MonitorInfo;
use crate::traits::DisplayServer;
use log::{info, warn};

/// A monitor being arranged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    /// Output name, unique within a session (e.g. `"DP-1"`).
    pub name: String,
    /// X origin in display-server coordinates.  Never clamped.
    pub x: i32,
    /// Y origin in display-server coordinates.  Never clamped.
    pub y: i32,
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
}

impl Monitor {
    pub fn new(name: impl Into<String>, x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive) in display-server coordinates.
    pub fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Bottom edge (exclusive) in display-server coordinates.
    pub fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }
}

impl From<MonitorInfo> for Monitor {
    fn from(info: MonitorInfo) -> Self {
        Self::new(info.name, info.x, info.y, info.width, info.height)
    }
}

/// Editing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Nothing selected; vertical keys move the cursor.
    Browsing,
    /// The monitor at this index is selected; direction keys translate it.
    Moving(usize),
}

/// Fallback arrangement used when the display server cannot be queried.
pub fn default_monitors() -> Vec<Monitor> {
    vec![
        Monitor::new("eDP-1", 0, 0, 1920, 1080),
        Monitor::new("DP-2", 1920, 0, 1920, 1080),
        Monitor::new("DP-4", 3840, 0, 2560, 1440),
    ]
}

/// The ordered set of monitors plus cursor and mode.
#[derive(Debug, Clone)]
pub struct Layout {
    monitors: Vec<Monitor>,
    cursor: usize,
    mode: Mode,
}

impl Layout {
    /// Create a browsing layout with the cursor on the first monitor.
    pub fn new(monitors: Vec<Monitor>) -> Self {
        Self {
            monitors,
            cursor: 0,
            mode: Mode::Browsing,
        }
    }

    /// Build the initial layout from the display server.
    ///
    /// Query failures and empty answers are not fatal: the
    /// [`default_monitors`] arrangement is used instead.
    pub fn discover<D: DisplayServer>(display: &D) -> Self {
        match display.monitors() {
            Ok(found) if !found.is_empty() => {
                info!("found {} monitor(s)", found.len());
                Self::new(found.into_iter().map(Monitor::from).collect())
            }
            Ok(_) => {
                warn!("display server reported no monitors, using default layout");
                Self::new(default_monitors())
            }
            Err(e) => {
                warn!("failed to query monitors ({}), using default layout", e);
                Self::new(default_monitors())
            }
        }
    }

    //  Accessors

    pub fn monitors(&self) -> &[Monitor] {
        &self.monitors
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Index of the active monitor.  `0` for an empty layout.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the monitor at `index` is selected for movement.
    pub fn is_selected(&self, index: usize) -> bool {
        self.mode == Mode::Moving(index)
    }

    //  Mutations

    /// Translate the selected monitor by `(dx, dy)`.
    ///
    /// No-op while browsing.  Coordinates saturate instead of overflowing.
    pub fn move_selected(&mut self, dx: i32, dy: i32) {
        if let Mode::Moving(index) = self.mode {
            if let Some(mon) = self.monitors.get_mut(index) {
                mon.x = mon.x.saturating_add(dx);
                mon.y = mon.y.saturating_add(dy);
            }
        }
    }

    /// Flip between browsing and moving the monitor under the cursor.
    pub fn toggle_selection(&mut self) {
        if self.monitors.is_empty() {
            return;
        }
        self.mode = match self.mode {
            Mode::Browsing => Mode::Moving(self.cursor),
            Mode::Moving(_) => Mode::Browsing,
        };
    }

    /// Move the cursor by `delta` (`-1` or `+1`), clamped to the layout.
    ///
    /// No-op while a monitor is selected.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.monitors.is_empty() || matches!(self.mode, Mode::Moving(_)) {
            return;
        }
        let last = self.monitors.len() - 1;
        self.cursor = match delta.signum() {
            -1 => self.cursor.saturating_sub(1),
            1 => (self.cursor + 1).min(last),
            _ => self.cursor,
        };
    }
}

//  Tests
