//! Core type definitions for the Wisp animation engine.
//!
//! All types are small `Copy` values, serializable, and produced fresh
//! every frame — nothing in here is ever mutated in place by the engine.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Grid geometry
// ---------------------------------------------------------------------------

/// Width of the abstract cell grid.
pub const GRID_WIDTH: i32 = 32;

/// Height of the abstract cell grid.
pub const GRID_HEIGHT: i32 = 32;

/// Horizontal body center, in grid units. Sits between columns 15 and 16
/// so the 10-cell-wide cross bar is symmetric.
pub const BODY_CENTER_X: f64 = 15.5;

/// Vertical body center at rest, in grid units. Bob and drift move the
/// body around this row.
pub const BASE_CENTER_Y: f64 = 18.0;

/// Vertical distance from the body center to the tendril attachment
/// point, in grid units.
pub const TENDRIL_TOP_OFFSET: f64 = 6.0;

/// An integer position on the abstract 32×32 cell grid.
///
/// Not pixels — a rendering sink multiplies by a cell size to reach
/// pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Grid column.
    pub x: i32,
    /// Grid row.
    pub y: i32,
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An 8-bit RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform gray of the given intensity (1-bit displays collapse the
    /// palette down to this).
    #[must_use]
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ---------------------------------------------------------------------------
// Frame output
// ---------------------------------------------------------------------------

/// One colored grid cell of a computed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Position on the grid.
    pub pos: GridPos,
    /// Fill color.
    pub color: Rgb,
}

/// A filled square in pixel space — the sink-facing output of
/// [`crate::Animator::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    /// Left edge, in pixels.
    pub x: i32,
    /// Top edge, in pixels.
    pub y: i32,
    /// Side length, in pixels.
    pub size: u32,
    /// Fill color.
    pub color: Rgb,
}

/// Map grid cells into pixel space: each cell becomes a filled square
/// of `cell_size` pixels at `origin + grid · cell_size`.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn scale_to_pixels(
    cells: &[Cell],
    origin_x: i32,
    origin_y: i32,
    cell_size: u32,
) -> Vec<PixelRect> {
    let size = cell_size as i32;
    cells
        .iter()
        .map(|cell| PixelRect {
            x: origin_x + cell.pos.x * size,
            y: origin_y + cell.pos.y * size,
            size: cell_size,
            color: cell.color,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Cell accumulator
// ---------------------------------------------------------------------------

/// Ordered accumulator for the cells of one frame.
///
/// Cells outside the 32×32 grid are silently dropped. Insertion order is
/// preserved and nothing is deduplicated: when two cells land on the
/// same position, the later one wins at the sink, which fills
/// sequentially. Eyes and body deliberately overlap tendril positions
/// near the center this way.
#[derive(Debug, Default)]
pub struct CellBuf {
    cells: Vec<Cell>,
}

impl CellBuf {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a cell if it lies on the grid.
    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return;
        }
        self.cells.push(Cell {
            pos: GridPos { x, y },
            color,
        });
    }

    /// Number of cells accumulated so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Consume the buffer, yielding the cells in draw order.
    #[must_use]
    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cellbuf_clips_to_grid() {
        let mut buf = CellBuf::new();
        buf.set(-1, 0, Rgb::gray(0));
        buf.set(0, -1, Rgb::gray(0));
        buf.set(GRID_WIDTH, 0, Rgb::gray(0));
        buf.set(0, GRID_HEIGHT, Rgb::gray(0));
        assert!(buf.is_empty());

        buf.set(0, 0, Rgb::gray(0));
        buf.set(GRID_WIDTH - 1, GRID_HEIGHT - 1, Rgb::gray(0));
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn cellbuf_preserves_draw_order() {
        let mut buf = CellBuf::new();
        buf.set(5, 5, Rgb::new(1, 0, 0));
        buf.set(5, 5, Rgb::new(2, 0, 0));
        let cells = buf.into_cells();
        // Same position twice: both kept, later entry last (it wins at
        // the sink).
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].color, Rgb::new(2, 0, 0));
    }

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(Rgb::new(0xee, 0xf0, 0xff).to_string(), "#eef0ff");
    }
}
