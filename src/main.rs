//! Entry point for **hyprdisplay**.
//!
//! Reads terminal input on a background thread and processes every event on
//! the main thread: update the editor, redraw, and start any requested
//! effect in the background.

use hyprdisplay::clipboard::SystemClipboard;
use hyprdisplay::config::Config;
use hyprdisplay::editor::{Editor, Outcome};
use hyprdisplay::effects::EffectRunner;
use hyprdisplay::hyprland::display::HyprlandDisplay;
use hyprdisplay::input::terminal::TerminalInput;
use hyprdisplay::layout::Layout;
use hyprdisplay::render::render;
use hyprdisplay::screen::{Screen, ScreenError};
use hyprdisplay::traits::{AppEvent, EventSource};
use log::{error, info};
use std::sync::{mpsc, Arc};

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprdisplay`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("hyprdisplay")
}

/// Log file path; the terminal itself is taken by the editor.
fn log_path() -> std::path::PathBuf {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    std::path::PathBuf::from(runtime).join("hyprdisplay.log")
}

/// Try to load the config from `$XDG_CONFIG_HOME/hyprdisplay/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path());
    if let Ok(file) = file {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
}

//  Main

fn main() {
    init_logging();

    match run() {
        Ok(()) => println!("Goodbye!"),
        Err(e) => {
            error!("{}", e);
            eprintln!("hyprdisplay: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), ScreenError> {
    let config = load_config();

    let display = HyprlandDisplay::new();
    let layout = Layout::discover(&display);
    let mut editor = Editor::new(layout, &config);
    let runner = Arc::new(EffectRunner::new(display, SystemClipboard::default()));

    let mut screen = Screen::enter()?;
    let (width, height) = screen.size()?;
    editor.handle(AppEvent::Resize(width, height));

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_input(tx.clone());

    screen.draw(&render(&editor), editor.viewport())?;
    for event in rx.iter() {
        match editor.handle(event) {
            Outcome::Continue => {}
            Outcome::Dispatch(effect) => runner.spawn(effect, tx.clone()),
            Outcome::Quit => break,
            Outcome::Abort(reason) => return Err(ScreenError::Input(reason)),
        }
        screen.draw(&render(&editor), editor.viewport())?;
    }

    info!("session ended");
    Ok(())
}

//  Helpers

fn spawn_input(tx: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || {
        let mut source = TerminalInput::new();
        if let Err(e) = source.run(tx.clone()) {
            error!("{}", e);
            let _ = tx.send(AppEvent::InputFailed(e.to_string()));
        }
    });
}
