//! Background execution of [`Effect`]s.
//!
//! Each effect runs on its own thread and sends exactly one
//! [`AppEvent::EffectFinished`] back to the main loop.  Effects cannot be
//! cancelled; if the loop has already quit, the report is dropped.

use crate::editor::Effect;
use crate::traits::{AppEvent, Clipboard, DisplayServer, EffectReport};
use log::debug;
use std::fmt::Display;
use std::sync::{mpsc, Arc};

/// Runs effects against a display server and a clipboard.
pub struct EffectRunner<D, C> {
    display: D,
    clipboard: C,
}

impl<D, C> EffectRunner<D, C>
where
    D: DisplayServer,
    C: Clipboard,
{
    pub fn new(display: D, clipboard: C) -> Self {
        Self { display, clipboard }
    }

    /// Run `effect` on the calling thread.
    pub fn run(&self, effect: &Effect) -> EffectReport {
        match effect {
            Effect::Apply(command) => apply_report(self.display.apply(command)),
            Effect::Copy(command) => copy_report(self.clipboard.copy(command), command),
        }
    }
}

impl<D, C> EffectRunner<D, C>
where
    D: DisplayServer + Send + Sync + 'static,
    C: Clipboard + Send + Sync + 'static,
{
    /// Run `effect` on a new thread and report into `sink`.
    pub fn spawn(self: &Arc<Self>, effect: Effect, sink: mpsc::Sender<AppEvent>) {
        let runner = Arc::clone(self);
        std::thread::spawn(move || {
            let report = runner.run(&effect);
            if sink.send(AppEvent::EffectFinished(report)).is_err() {
                debug!("event loop gone, dropping effect report");
            }
        });
    }
}

/// Message shown after applying, followed by whatever the command printed.
pub fn apply_report<E: Display>(result: Result<String, E>) -> EffectReport {
    match result {
        Ok(output) => {
            let output = output.trim_end();
            if output.is_empty() {
                EffectReport::success("Configuration applied successfully!")
            } else {
                EffectReport::success(format!("Configuration applied successfully!\n{}", output))
            }
        }
        Err(e) => EffectReport::failure(format!("Error applying configuration: {}", e)),
    }
}

/// Message shown after copying; on failure it carries the raw command so
/// the operator can copy it by hand.
pub fn copy_report<E: Display>(result: Result<String, E>, command: &str) -> EffectReport {
    match result {
        Ok(backend) => {
            EffectReport::success(format!("Configuration copied to clipboard using {}!", backend))
        }
        Err(e) => {
            debug!("clipboard unavailable: {}", e);
            EffectReport::failure(format!(
                "Could not copy to clipboard. Here's your configuration:\n{}",
                command
            ))
        }
    }
}
