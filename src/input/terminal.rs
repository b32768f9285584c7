//! Crossterm-backed [`EventSource`].
//!
//! Blocks on [`crossterm::event::read`] and forwards mapped key presses and
//! resizes to the main loop.  Everything else (mouse, focus, paste, unbound
//! keys) is dropped here.

use crate::input::keymap;
use crate::traits::{AppEvent, EventSource};
use crossterm::event::{self, Event};
use log::{debug, info};
use std::sync::mpsc;

/// Reads events from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalInput;

/// Error reading from the terminal.
#[derive(Debug, thiserror::Error)]
#[error("terminal input error: {0}")]
pub struct TerminalInputError(#[from] std::io::Error);

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

/// Translate a crossterm event, or `None` if the editor does not care.
pub fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => keymap::action_for(&key).map(AppEvent::Input),
        Event::Resize(width, height) => Some(AppEvent::Resize(width, height)),
        _ => None,
    }
}

impl EventSource for TerminalInput {
    type Error = TerminalInputError;

    /// Blocks until the sink is closed or reading fails.
    fn run(&mut self, sink: mpsc::Sender<AppEvent>) -> Result<(), Self::Error> {
        loop {
            let raw = event::read()?;
            if let Some(ev) = translate(raw) {
                debug!("input {:?}", ev);
                if sink.send(ev).is_err() {
                    info!("event loop closed, stopping input");
                    return Ok(());
                }
            }
        }
    }
}
