//! Frame composition.
//!
//! A frame is rebuilt from scratch after every event: title, layout
//! diagram, monitor list, status message and help footer.
//!
//! No line of a frame is wider than the viewport.  Diagram rows are clipped;
//! text is wrapped so that long commands stay complete.

use crate::editor::Editor;
use crate::input::keymap;
use crate::layout::Layout;
use crate::projection::{self, Viewport};

pub const TITLE: &str = "Hyprland Display Manager";

/// List-line prefix for the monitor at `index`.
fn prefix(layout: &Layout, index: usize) -> &'static str {
    if layout.is_selected(index) {
        "* "
    } else if index == layout.cursor() {
        "→ "
    } else {
        "  "
    }
}

/// First `width` characters of `line`.  A `width` of `0` means unlimited.
fn clip(line: &str, width: usize) -> String {
    if width == 0 {
        line.to_string()
    } else {
        line.chars().take(width).collect()
    }
}

/// Split `line` into pieces of at most `width` characters.
fn wrap(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if width == 0 || chars.len() <= width {
        return vec![line.to_string()];
    }
    chars.chunks(width).map(|c| c.iter().collect()).collect()
}

/// Build a full frame.
pub fn frame(
    layout: &Layout,
    viewport: Viewport,
    status: Option<&str>,
    help: &[String],
) -> String {
    let width = viewport.width as usize;
    let mut out = vec![TITLE.to_string(), String::new()];

    let diagram = projection::draw(&projection::rasterize(layout, viewport));
    out.extend(diagram.lines().map(|line| clip(line, width)));
    out.push(String::new());

    out.push("Monitors:".to_string());
    for (i, m) in layout.monitors().iter().enumerate() {
        let line = format!(
            "{}{}: Position({},{}) Size({}×{})",
            prefix(layout, i),
            m.name,
            m.x,
            m.y,
            m.width,
            m.height
        );
        out.extend(wrap(&line, width));
    }

    if let Some(status) = status {
        out.push(String::new());
        for line in status.lines() {
            out.extend(wrap(line, width));
        }
    }

    out.push(String::new());
    for line in help {
        out.extend(wrap(line, width));
    }
    out.join("\n")
}

/// Build the frame for the editor's current state.
pub fn render(editor: &Editor) -> String {
    let viewport = editor.viewport();
    frame(
        editor.layout(),
        viewport,
        editor.status(),
        &keymap::help_lines(viewport.width as usize),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Action, Direction};
    use crate::config::Config;
    use crate::layout::default_monitors;
    use crate::traits::AppEvent;

    fn editor() -> Editor {
        let mut e = Editor::new(Layout::new(default_monitors()), &Config::default());
        e.handle(AppEvent::Resize(120, 40));
        e
    }

    #[test]
    fn frame_sections_in_order() {
        let text = render(&editor());
        let title = text.find(TITLE).unwrap();
        let diagram = text.find("Display Layout:").unwrap();
        let legend = text.find(projection::LEGEND).unwrap();
        let list = text.find("Monitors:").unwrap();
        let help = text.find("↑/k move up").unwrap();
        assert_eq!(title, 0);
        assert!(title < diagram && diagram < legend && legend < list && list < help);
    }

    #[test]
    fn list_lines_show_position_and_size() {
        let text = render(&editor());
        assert!(text.contains("→ eDP-1: Position(0,0) Size(1920×1080)\n"));
        assert!(text.contains("  DP-2: Position(1920,0) Size(1920×1080)\n"));
        assert!(text.contains("  DP-4: Position(3840,0) Size(2560×1440)\n"));
    }

    #[test]
    fn selected_prefix_wins_over_cursor() {
        let mut e = editor();
        e.handle(AppEvent::Input(Action::Go(Direction::Down)));
        e.handle(AppEvent::Input(Action::ToggleSelect));
        e.handle(AppEvent::Input(Action::Go(Direction::Left)));
        let text = render(&e);
        assert!(text.contains("* DP-2: Position(1910,0) Size(1920×1080)\n"));
        assert!(!text.contains("→ "));
    }

    #[test]
    fn status_is_rendered_before_help() {
        let mut e = editor();
        e.handle(AppEvent::Input(Action::Apply));
        let text = render(&e);
        let status = text.find("Applying configuration:").unwrap();
        let help = text.find("↑/k move up").unwrap();
        assert!(status < help);
        assert!(text
            .replace('\n', "")
            .contains("hyprctl keyword monitor 'DP-4,highres,3840,0,1'"));
    }

    #[test]
    fn lines_fit_an_eighty_column_terminal() {
        let mut e = editor();
        e.handle(AppEvent::Resize(80, 24));
        e.handle(AppEvent::Input(Action::Apply));
        let text = render(&e);
        let widest = text.lines().map(|l| l.chars().count()).max().unwrap();
        assert!(widest <= 80, "widest line is {} columns", widest);
        assert!(text.replace('\n', "").contains(&e.command()));
        assert!(text.ends_with("q/ctrl+c quit"));
    }

    #[test]
    fn diagram_rows_are_clipped_not_wrapped() {
        let layout = Layout::new(default_monitors());
        let text = frame(&layout, Viewport::new(30, 40), None, &[]);
        let borders = text.lines().filter(|l| l.starts_with('┌')).count();
        assert_eq!(borders, 1);
        assert!(text.lines().all(|l| l.chars().count() <= 30));
    }

    #[test]
    fn wrap_splits_on_width() {
        assert_eq!(wrap("abcdefg", 3), ["abc", "def", "g"]);
        assert_eq!(wrap("abc", 3), ["abc"]);
        assert_eq!(wrap("", 3), [""]);
        assert_eq!(wrap("abcdef", 0), ["abcdef"]);
    }

    #[test]
    fn frame_is_pure() {
        let e = editor();
        assert_eq!(render(&e), render(&e));
    }

    #[test]
    fn empty_layout_still_renders() {
        let text = frame(
            &Layout::new(Vec::new()),
            Viewport::new(0, 0),
            None,
            &["help".to_string()],
        );
        assert!(text.contains("Display Layout:"));
        assert!(text.contains("Monitors:\n\nhelp"));
    }
}
