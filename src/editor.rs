//! The editor state machine.
//!
//! [`Editor`] owns the [`Layout`], the current [`Viewport`] and the status
//! line, and reacts to [`AppEvent`]s one at a time.  Side effects are never
//! performed here: applying or copying a layout yields an [`Effect`] that the
//! event loop runs in the background, and whose [`EffectReport`](crate::traits::EffectReport) comes back
//! as another event.

use crate::command::{Action, Direction};
use crate::config::Config;
use crate::hyprland::keyword::{layout_command, RuleConfig};
use crate::layout::{Layout, Mode};
use crate::projection::Viewport;
use crate::traits::AppEvent;
use log::{debug, info, warn};

/// A side effect requested by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the command line against the display server.
    Apply(String),
    /// Put the command line on the clipboard.
    Copy(String),
}

/// What the event loop should do after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw and wait for the next event.
    Continue,
    /// Redraw, then start `Effect` in the background.
    Dispatch(Effect),
    /// Stop consuming events.
    Quit,
    /// Stop consuming events and exit with an error.
    Abort(String),
}

/// Editing session state.
#[derive(Debug, Clone)]
pub struct Editor {
    layout: Layout,
    viewport: Viewport,
    status: Option<String>,
    move_step: i32,
    rule: RuleConfig,
}

impl Editor {
    pub fn new(layout: Layout, config: &Config) -> Self {
        Self {
            layout,
            viewport: Viewport::default(),
            status: None,
            move_step: config.editor.move_step,
            rule: config.rule.clone(),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Last message produced by an action or a finished effect.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// The `hyprctl` command line for the current layout.
    pub fn command(&self) -> String {
        layout_command(&self.layout, &self.rule)
    }

    /// Process a single event.
    pub fn handle(&mut self, event: AppEvent) -> Outcome {
        match event {
            AppEvent::Input(action) => self.handle_action(action),
            AppEvent::Resize(width, height) => {
                self.viewport = Viewport::new(width, height);
                Outcome::Continue
            }
            AppEvent::EffectFinished(report) => {
                if report.ok {
                    info!("{}", report.message);
                } else {
                    warn!("{}", report.message);
                }
                self.status = Some(report.message);
                Outcome::Continue
            }
            AppEvent::InputFailed(reason) => Outcome::Abort(reason),
        }
    }

    fn handle_action(&mut self, action: Action) -> Outcome {
        match action {
            Action::Go(dir) => {
                self.go(dir);
                Outcome::Continue
            }
            Action::ToggleSelect => {
                self.layout.toggle_selection();
                debug!("mode now {:?}", self.layout.mode());
                Outcome::Continue
            }
            Action::Apply => self.request(Effect::Apply),
            Action::Copy => self.request(Effect::Copy),
            Action::Quit => {
                info!("quit requested");
                Outcome::Quit
            }
        }
    }

    fn go(&mut self, dir: Direction) {
        match self.layout.mode() {
            Mode::Moving(_) => {
                let (dx, dy) = dir.offset();
                self.layout
                    .move_selected(dx * self.move_step, dy * self.move_step);
            }
            Mode::Browsing => match dir {
                Direction::Up => self.layout.move_cursor(-1),
                Direction::Down => self.layout.move_cursor(1),
                Direction::Left | Direction::Right => {}
            },
        }
    }

    fn request(&mut self, make: fn(String) -> Effect) -> Outcome {
        if self.layout.is_empty() {
            self.status = Some("No monitors to configure.".into());
            return Outcome::Continue;
        }
        let command = self.command();
        let effect = make(command.clone());
        self.status = Some(match &effect {
            Effect::Apply(_) => format!("Applying configuration:\n{}", command),
            Effect::Copy(_) => "Copying configuration to clipboard...".to_string(),
        });
        info!("dispatching {:?}", effect);
        Outcome::Dispatch(effect)
    }
}

//  Tests
