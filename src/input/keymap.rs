//! Key bindings.
//!
//! | keys                | action            |
//! |---------------------|-------------------|
//! | `↑` / `k`           | up                |
//! | `↓` / `j`           | down              |
//! | `←` / `h`           | left              |
//! | `→` / `l`           | right             |
//! | `enter` / `space`   | select / deselect |
//! | `a`                 | apply             |
//! | `c`                 | copy              |
//! | `q` / `ctrl+c`      | quit              |

use crate::command::{Action, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A documented key binding, used to build the help footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub keys: &'static str,
    pub help: &'static str,
}

pub const BINDINGS: &[Binding] = &[
    Binding { keys: "↑/k", help: "move up" },
    Binding { keys: "↓/j", help: "move down" },
    Binding { keys: "←/h", help: "move left" },
    Binding { keys: "→/l", help: "move right" },
    Binding { keys: "enter/space", help: "select monitor" },
    Binding { keys: "a", help: "apply configuration" },
    Binding { keys: "c", help: "copy to clipboard" },
    Binding { keys: "q/ctrl+c", help: "quit" },
];

const SEPARATOR: &str = " • ";

/// Help text listing every binding, packed into lines of at most `width`
/// columns.  A `width` of `0` puts everything on one line.
///
/// Bindings are never split; a single binding wider than `width` gets a
/// line of its own.
pub fn help_lines(width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for b in BINDINGS {
        let entry = format!("{} {}", b.keys, b.help);
        if current.is_empty() {
            current = entry;
            continue;
        }
        let joined =
            current.chars().count() + SEPARATOR.chars().count() + entry.chars().count();
        if width == 0 || joined <= width {
            current.push_str(SEPARATOR);
            current.push_str(&entry);
        } else {
            lines.push(std::mem::take(&mut current));
            current = entry;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Map a key event to an action.  Releases and unbound keys yield `None`.
pub fn action_for(key: &KeyEvent) -> Option<Action> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::Go(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::Go(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::Go(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Go(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::ToggleSelect,
        KeyCode::Char('a') => Action::Apply,
        KeyCode::Char('c') => Action::Copy,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}
