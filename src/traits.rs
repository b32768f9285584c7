//! Core traits that decouple hyprdisplay from any specific display server,
//! clipboard tool, or input transport.
//!
//! Every concrete backend (Hyprland, the system clipboard, the crossterm terminal, a test
//! harness, …) implements one of these traits.  The
//! [`Editor`](crate::editor::Editor) and the event loop only depend on these
//! abstractions.

use crate::command::{Action, MonitorInfo};
use std::sync::mpsc;

/// Abstraction over a display server that can enumerate monitors and apply
/// a monitor configuration.
pub trait DisplayServer {
    /// The error type produced by this display server.
    type Error: std::error::Error + Send + 'static;

    /// Return the list of monitors the display server knows about.
    fn monitors(&self) -> Result<Vec<MonitorInfo>, Self::Error>;

    /// Execute a generated configuration command and return its combined
    /// output.
    fn apply(&self, command: &str) -> Result<String, Self::Error>;
}

/// A way of placing text on the system clipboard.
pub trait Clipboard {
    /// The error type produced by this clipboard.
    type Error: std::error::Error + Send + 'static;

    /// Copy `text` and return the name of the backend that accepted it.
    fn copy(&self, text: &str) -> Result<String, Self::Error>;
}

//  Events

/// Outcome of a background effect, rendered as the status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectReport {
    /// Whether the effect succeeded.
    pub ok: bool,
    /// Human-readable result text.
    pub message: String,
}

impl EffectReport {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Everything the main loop reacts to, delivered over one
/// [`mpsc`](std::sync::mpsc) channel in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key that maps to an editor action.
    Input(Action),
    /// The terminal was resized to `(width, height)` cells.
    Resize(u16, u16),
    /// A background effect finished.
    EffectFinished(EffectReport),
    /// The input source stopped with an error; the session cannot continue.
    InputFailed(String),
}

/// A source of [`AppEvent`]s.
///
/// # Contract
///
/// * [`run`](EventSource::run) **blocks** until the source is exhausted, the
///   sink is closed, or an unrecoverable error occurs.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait EventSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every event into `sink`.
    fn run(&mut self, sink: mpsc::Sender<AppEvent>) -> Result<(), Self::Error>;
}
