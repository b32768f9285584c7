//! Full-screen terminal session.
//!
//! [`Screen::enter`] switches the terminal into raw mode on the alternate
//! screen; dropping the [`Screen`] restores it, also on early returns.

use crate::projection::Viewport;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use log::debug;
use std::io::{self, Stdout, Write};

/// Failure to set up or draw on the terminal.  Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("failed to initialise terminal: {0}")]
    Setup(#[source] io::Error),
    #[error("failed to draw frame: {0}")]
    Draw(#[source] io::Error),
    #[error("lost terminal input: {0}")]
    Input(String),
}

/// An active full-screen session on stdout.
pub struct Screen {
    out: Stdout,
}

impl Screen {
    pub fn enter() -> Result<Self, ScreenError> {
        enable_raw_mode().map_err(ScreenError::Setup)?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(ScreenError::Setup(e));
        }
        debug!("entered alternate screen");
        Ok(Self { out })
    }

    /// Current terminal size in cells.
    pub fn size(&self) -> Result<(u16, u16), ScreenError> {
        terminal::size().map_err(ScreenError::Setup)
    }

    /// Replace the screen contents with `frame`.
    ///
    /// Lines and characters beyond the viewport are cut off, so the terminal
    /// never wraps or scrolls.
    pub fn draw(&mut self, frame: &str, viewport: Viewport) -> Result<(), ScreenError> {
        queue!(self.out, Clear(ClearType::All)).map_err(ScreenError::Draw)?;
        for (row, line) in frame.lines().take(viewport.height as usize).enumerate() {
            let visible: String = line.chars().take(viewport.width as usize).collect();
            queue!(self.out, MoveTo(0, row as u16), Print(visible)).map_err(ScreenError::Draw)?;
        }
        self.out.flush().map_err(ScreenError::Draw)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        debug!("left alternate screen");
    }
}
