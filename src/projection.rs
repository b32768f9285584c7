//! Projection of the monitor layout onto a character grid.
//!
//! Display-server pixels are mapped to terminal cells in two steps.  First a
//! [`scale`] is derived from the layout's bounding box and the terminal
//! [`Viewport`].  Then every monitor rectangle is divided by a per-axis cell
//! size ([`X_UNITS_PER_CELL`], [`Y_UNITS_PER_CELL`]) and stamped into a
//! [`Raster`].  Terminal cells are roughly twice as tall as they are wide,
//! hence the vertical divisor being twice the horizontal one.
//!
//! The bounding box always contains the display-server origin `(0, 0)`, and
//! the same box is used for both the scale and the raster placement, so
//! monitors with negative origins are projected consistently.

use crate::layout::{Layout, Monitor};
use std::collections::BTreeSet;

/// Lowest scale ever returned by [`scale`].
pub const MIN_SCALE: f64 = 0.1;
/// Display-server pixels per terminal column (before scaling).
pub const X_UNITS_PER_CELL: f64 = 20.0;
/// Display-server pixels per terminal row (before scaling).
pub const Y_UNITS_PER_CELL: f64 = 40.0;
/// Smallest grid ever produced, in cells.
pub const MIN_GRID_WIDTH: usize = 20;
pub const MIN_GRID_HEIGHT: usize = 10;

/// Share of the terminal the diagram may occupy horizontally.
const WIDTH_SHARE: f64 = 0.5;
/// Share of the terminal the diagram may occupy vertically; the rest holds
/// the monitor list and help text.
const HEIGHT_SHARE: f64 = 0.3;
const PAD_X: usize = 10;
const PAD_Y: usize = 5;

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Real-coordinate bounding box of a layout, origin included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    pub fn of(monitors: &[Monitor]) -> Self {
        monitors.iter().fold(
            Bounds {
                min_x: 0,
                min_y: 0,
                max_x: 0,
                max_y: 0,
            },
            |b, m| Bounds {
                min_x: b.min_x.min(m.x as i64),
                min_y: b.min_y.min(m.y as i64),
                max_x: b.max_x.max(m.right()),
                max_y: b.max_y.max(m.bottom()),
            },
        )
    }

    /// Horizontal extent, at least one pixel.
    pub fn span_x(&self) -> i64 {
        (self.max_x - self.min_x).max(1)
    }

    /// Vertical extent, at least one pixel.
    pub fn span_y(&self) -> i64 {
        (self.max_y - self.min_y).max(1)
    }
}

/// Scale factor that fits `bounds` into `viewport`, never below
/// [`MIN_SCALE`].
pub fn scale(bounds: &Bounds, viewport: Viewport) -> f64 {
    let scale_x = viewport.width as f64 / bounds.span_x() as f64 * WIDTH_SHARE;
    let scale_y = viewport.height as f64 / bounds.span_y() as f64 * HEIGHT_SHARE;
    scale_x.min(scale_y).max(MIN_SCALE)
}

//  Raster

/// Fill style of a monitor footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Plain,
    Active,
    Selected,
}

impl Glyph {
    pub fn symbol(self) -> char {
        match self {
            Glyph::Plain => '░',
            Glyph::Active => '▓',
            Glyph::Selected => '█',
        }
    }
}

/// One grid cell.  Painted cells remember which monitor painted them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Fill { owner: usize, glyph: Glyph },
    Label { owner: usize, ch: char },
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Fill { glyph, .. } => glyph.symbol(),
            Cell::Label { ch, .. } => ch,
        }
    }

    pub fn owner(self) -> Option<usize> {
        match self {
            Cell::Empty => None,
            Cell::Fill { owner, .. } | Cell::Label { owner, .. } => Some(owner),
        }
    }
}

/// Grid-space rectangle, half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub start_x: usize,
    pub start_y: usize,
    pub end_x: usize,
    pub end_y: usize,
}

impl CellRect {
    pub fn width(&self) -> usize {
        self.end_x.saturating_sub(self.start_x)
    }

    pub fn height(&self) -> usize {
        self.end_y.saturating_sub(self.start_y)
    }
}

/// A rasterized layout.
#[derive(Debug, Clone)]
pub struct Raster {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Raster {
    fn blank(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Silently ignores writes outside the grid.
    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Indices of every monitor that still owns at least one cell.
    pub fn owners(&self) -> BTreeSet<usize> {
        self.cells.iter().filter_map(|c| c.owner()).collect()
    }
}

/// Grid geometry shared by every monitor of one frame.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    bounds: Bounds,
    scale: f64,
    width: usize,
    height: usize,
}

impl Projection {
    pub fn new(monitors: &[Monitor], viewport: Viewport) -> Self {
        let bounds = Bounds::of(monitors);
        let scale = scale(&bounds, viewport);
        let width =
            (to_cells(bounds.span_x(), scale, X_UNITS_PER_CELL) + PAD_X).max(MIN_GRID_WIDTH);
        let height =
            (to_cells(bounds.span_y(), scale, Y_UNITS_PER_CELL) + PAD_Y).max(MIN_GRID_HEIGHT);
        Self {
            bounds,
            scale,
            width,
            height,
        }
    }

    pub fn grid_size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Project a monitor into grid space, clipped to the grid.
    pub fn rect(&self, monitor: &Monitor) -> CellRect {
        let start_x = to_cells(monitor.x as i64 - self.bounds.min_x, self.scale, X_UNITS_PER_CELL);
        let start_y = to_cells(monitor.y as i64 - self.bounds.min_y, self.scale, Y_UNITS_PER_CELL);
        let end_x = start_x + to_cells(monitor.width as i64, self.scale, X_UNITS_PER_CELL);
        let end_y = start_y + to_cells(monitor.height as i64, self.scale, Y_UNITS_PER_CELL);
        CellRect {
            start_x: start_x.min(self.width),
            start_y: start_y.min(self.height),
            end_x: end_x.min(self.width),
            end_y: end_y.min(self.height),
        }
    }
}

fn to_cells(units: i64, scale: f64, per_cell: f64) -> usize {
    (units.max(0) as f64 * scale / per_cell) as usize
}

fn glyph_for(layout: &Layout, index: usize) -> Glyph {
    if layout.is_selected(index) {
        Glyph::Selected
    } else if index == layout.cursor() {
        Glyph::Active
    } else {
        Glyph::Plain
    }
}

/// Stamp every monitor of `layout` into a grid sized for `viewport`.
///
/// Monitors are painted in layout order, so later ones cover earlier ones
/// where they overlap.
pub fn rasterize(layout: &Layout, viewport: Viewport) -> Raster {
    let projection = Projection::new(layout.monitors(), viewport);
    let (width, height) = projection.grid_size();
    let mut raster = Raster::blank(width, height);

    for (owner, monitor) in layout.monitors().iter().enumerate() {
        let rect = projection.rect(monitor);
        let glyph = glyph_for(layout, owner);

        for y in rect.start_y..rect.end_y {
            for x in rect.start_x..rect.end_x {
                raster.set(x, y, Cell::Fill { owner, glyph });
            }
        }

        let name_len = monitor.name.chars().count();
        if rect.height() > 0 && rect.width() > name_len + 2 {
            let name_y = (rect.start_y + rect.end_y) / 2;
            for (i, ch) in monitor.name.chars().enumerate() {
                let x = rect.start_x + 1 + i;
                if x < rect.end_x {
                    raster.set(x, name_y, Cell::Label { owner, ch });
                }
            }
        }
    }

    raster
}

/// Legend printed under the diagram.
pub const LEGEND: &str = "Legend: ░ = Monitor  ▓ = Active Monitor  █ = Selected for Movement";

/// Draw `raster` inside a box-drawing border, followed by the legend.
pub fn draw(raster: &Raster) -> String {
    let edge = "─".repeat(raster.width());
    let mut out = String::from("Display Layout:\n");
    out.push('┌');
    out.push_str(&edge);
    out.push_str("┐\n");
    for row in raster.rows() {
        out.push('│');
        out.extend(row.iter().map(|c| c.symbol()));
        out.push_str("│\n");
    }
    out.push('└');
    out.push_str(&edge);
    out.push_str("┘\n\n");
    out.push_str(LEGEND);
    out.push('\n');
    out
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::default_monitors;

    fn default_layout() -> Layout {
        Layout::new(default_monitors())
    }

    fn count(raster: &Raster, wanted: Glyph) -> usize {
        raster
            .rows()
            .flatten()
            .filter(|c| matches!(c, Cell::Fill { glyph, .. } if *glyph == wanted))
            .count()
    }

    #[test]
    fn bounds_include_origin() {
        let b = Bounds::of(&[Monitor::new("DP-1", 100, 200, 1920, 1080)]);
        assert_eq!(
            b,
            Bounds {
                min_x: 0,
                min_y: 0,
                max_x: 2020,
                max_y: 1280
            }
        );
    }

    #[test]
    fn bounds_follow_negative_origins() {
        let b = Bounds::of(&[
            Monitor::new("DP-1", 0, 0, 1920, 1080),
            Monitor::new("DP-2", -2560, -360, 2560, 1440),
        ]);
        assert_eq!((b.min_x, b.min_y), (-2560, -360));
        assert_eq!((b.span_x(), b.span_y()), (4480, 1440));
    }

    #[test]
    fn empty_bounds_have_unit_span() {
        let b = Bounds::of(&[]);
        assert_eq!((b.span_x(), b.span_y()), (1, 1));
    }

    #[test]
    fn scale_fits_large_viewport() {
        let b = Bounds::of(&[Monitor::new("DP-1", 0, 0, 1920, 1080)]);
        let s = scale(&b, Viewport::new(1000, 1000));
        assert!((s - 1000.0 / 1920.0 * 0.5).abs() < 1e-9);
    }

    #[test]
    fn scale_never_below_floor() {
        let huge = Bounds::of(&[Monitor::new("DP-1", i32::MAX - 10, 0, u32::MAX, u32::MAX)]);
        assert_eq!(scale(&huge, Viewport::new(1, 1)), MIN_SCALE);
        assert_eq!(scale(&huge, Viewport::new(0, 0)), MIN_SCALE);
        let normal = Bounds::of(&default_monitors());
        assert_eq!(scale(&normal, Viewport::new(120, 40)), MIN_SCALE);
    }

    #[test]
    fn default_layout_renders_three_footprints() {
        let raster = rasterize(&default_layout(), Viewport::new(120, 40));
        assert!(raster.width() >= MIN_GRID_WIDTH);
        assert!(raster.height() >= MIN_GRID_HEIGHT);
        assert_eq!(raster.width(), 42);
        assert_eq!(raster.height(), 10);
        assert_eq!(raster.owners(), BTreeSet::from([0, 1, 2]));
    }

    #[test]
    fn default_layout_footprints_do_not_overlap() {
        let p = Projection::new(&default_monitors(), Viewport::new(120, 40));
        let rects: Vec<CellRect> = default_monitors().iter().map(|m| p.rect(m)).collect();
        assert_eq!((rects[0].start_x, rects[0].end_x), (0, 9));
        assert_eq!((rects[1].start_x, rects[1].end_x), (9, 18));
        assert_eq!((rects[2].start_x, rects[2].end_x), (19, 31));
        assert_eq!((rects[2].start_y, rects[2].end_y), (0, 3));
    }

    #[test]
    fn empty_layout_renders_minimum_blank_grid() {
        let raster = rasterize(&Layout::new(Vec::new()), Viewport::new(80, 24));
        assert_eq!((raster.width(), raster.height()), (MIN_GRID_WIDTH, MIN_GRID_HEIGHT));
        assert!(raster.owners().is_empty());
    }

    #[test]
    fn cursor_monitor_is_active() {
        let raster = rasterize(&default_layout(), Viewport::new(120, 40));
        assert_eq!(raster.cell(0, 0), Some(Cell::Fill { owner: 0, glyph: Glyph::Active }));
        assert_eq!(raster.cell(10, 0), Some(Cell::Fill { owner: 1, glyph: Glyph::Plain }));
        assert_eq!(count(&raster, Glyph::Selected), 0);
    }

    #[test]
    fn selected_beats_active() {
        let mut layout = default_layout();
        layout.toggle_selection();
        let raster = rasterize(&layout, Viewport::new(120, 40));
        assert_eq!(raster.cell(0, 0), Some(Cell::Fill { owner: 0, glyph: Glyph::Selected }));
        assert_eq!(count(&raster, Glyph::Active), 0);
    }

    #[test]
    fn names_are_drawn_inside_wide_footprints() {
        let raster = rasterize(&default_layout(), Viewport::new(120, 40));
        let row: String = raster.rows().nth(1).unwrap().iter().map(|c| c.symbol()).collect();
        assert!(row.contains("eDP-1"));
        assert!(row.contains("DP-4"));
        assert_eq!(raster.cell(1, 1), Some(Cell::Label { owner: 0, ch: 'e' }));
    }

    #[test]
    fn names_skipped_when_footprint_too_narrow() {
        let layout = Layout::new(vec![Monitor::new("HDMI-A-1", 0, 0, 800, 600)]);
        let raster = rasterize(&layout, Viewport::new(80, 24));
        assert!(raster
            .rows()
            .flatten()
            .all(|c| !matches!(c, Cell::Label { .. })));
    }

    #[test]
    fn later_monitors_paint_over_earlier_ones() {
        let layout = Layout::new(vec![
            Monitor::new("DP-1", 0, 0, 1920, 1080),
            Monitor::new("DP-2", 0, 0, 1920, 1080),
        ]);
        let raster = rasterize(&layout, Viewport::new(120, 40));
        assert_eq!(raster.owners(), BTreeSet::from([1]));
    }

    #[test]
    fn negative_origin_monitor_is_placed_left() {
        let layout = Layout::new(vec![
            Monitor::new("DP-1", 0, 0, 1920, 1080),
            Monitor::new("DP-2", -1920, 0, 1920, 1080),
        ]);
        let raster = rasterize(&layout, Viewport::new(120, 40));
        assert_eq!(raster.cell(0, 0).and_then(|c| c.owner()), Some(1));
        assert_eq!(raster.cell(10, 0).and_then(|c| c.owner()), Some(0));
    }

    #[test]
    fn rect_is_clipped_to_grid() {
        let monitors = [Monitor::new("DP-1", 0, 0, 1920, 1080)];
        let p = Projection::new(&monitors, Viewport::new(120, 40));
        let (w, h) = p.grid_size();
        let far = Monitor::new("far", 1_000_000, 1_000_000, 1920, 1080);
        let r = p.rect(&far);
        assert_eq!((r.start_x, r.end_x, r.start_y, r.end_y), (w, w, h, h));
        assert_eq!(r.width(), 0);
    }

    #[test]
    fn drawing_adds_border_and_legend() {
        let raster = rasterize(&default_layout(), Viewport::new(120, 40));
        let text = draw(&raster);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Display Layout:");
        assert!(lines[1].starts_with('┌') && lines[1].ends_with('┐'));
        assert_eq!(lines[1].chars().count(), raster.width() + 2);
        assert!(lines[2].starts_with('│') && lines[2].ends_with('│'));
        assert!(lines[raster.height() + 2].starts_with('└'));
        assert_eq!(*lines.last().unwrap(), LEGEND);
    }
}
