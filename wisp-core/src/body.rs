//! Body pose model — the fixed cell tables and their per-frame motion.
//!
//! The body is a tapered cross: core, four colored arms, and nubs
//! capping the vertical arms. Its cells are a compiled-in table of
//! `(column, row-offset, color)` entries; only their rendered position
//! responds to mood and time (bob, drift, rotation projection), never
//! the table itself. A sibling monochrome table with identical geometry
//! serves 1-bit displays.

use std::f64::consts::TAU;

use crate::mood::MoodParams;
use crate::palette;
use crate::pulse;
use crate::types::{BASE_CENTER_Y, BODY_CENTER_X, CellBuf, Rgb};

/// One entry of the body cell table: a grid column, a row offset from
/// the body center, and a fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyCell {
    /// Grid column at rest (the rotation projection foreshortens this
    /// around [`BODY_CENTER_X`]).
    pub x: i32,
    /// Row offset from the body center.
    pub dy: i32,
    /// Fill color.
    pub color: Rgb,
}

const fn bc(x: i32, dy: i32, color: Rgb) -> BodyCell {
    BodyCell { x, dy, color }
}

/// Number of visible body cells.
pub const BODY_CELL_COUNT: usize = 60;

const U: Rgb = palette::ARM_UP;
const D: Rgb = palette::ARM_DOWN;
const L: Rgb = palette::ARM_LEFT;
const R: Rgb = palette::ARM_RIGHT;
const O: Rgb = palette::CORE;
const N: Rgb = palette::NUB;

/// The colored body cell table, in draw order top to bottom.
#[rustfmt::skip]
pub static BODY_CELLS: [BodyCell; BODY_CELL_COUNT] = [
    // top nub
    bc(15, -6, N), bc(16, -6, N),
    // up arm tip (2px)
    bc(15, -5, U), bc(16, -5, U),
    // up arm base (4px)
    bc(14, -4, U), bc(15, -4, U), bc(16, -4, U), bc(17, -4, U),
    bc(14, -3, U), bc(15, -3, U), bc(16, -3, U), bc(17, -3, U),
    // cross bar top (narrow: 2+4+2)
    bc(12, -2, L), bc(13, -2, L), bc(14, -2, O), bc(15, -2, O),
    bc(16, -2, O), bc(17, -2, O), bc(18, -2, R), bc(19, -2, R),
    // cross bar wide (3+4+3)
    bc(11, -1, L), bc(12, -1, L), bc(13, -1, L), bc(14, -1, O),
    bc(15, -1, O), bc(16, -1, O), bc(17, -1, O), bc(18, -1, R),
    bc(19, -1, R), bc(20, -1, R),
    bc(11,  0, L), bc(12,  0, L), bc(13,  0, L), bc(14,  0, O),
    bc(15,  0, O), bc(16,  0, O), bc(17,  0, O), bc(18,  0, R),
    bc(19,  0, R), bc(20,  0, R),
    // cross bar bottom (narrow: 2+4+2)
    bc(12,  1, L), bc(13,  1, L), bc(14,  1, O), bc(15,  1, O),
    bc(16,  1, O), bc(17,  1, O), bc(18,  1, R), bc(19,  1, R),
    // down arm base (4px)
    bc(14,  2, D), bc(15,  2, D), bc(16,  2, D), bc(17,  2, D),
    bc(14,  3, D), bc(15,  3, D), bc(16,  3, D), bc(17,  3, D),
    // down arm tip (2px)
    bc(15,  4, D), bc(16,  4, D),
    // bottom nub
    bc(15,  5, N), bc(16,  5, N),
];

const fn mono_table() -> [BodyCell; BODY_CELL_COUNT] {
    let mut cells = BODY_CELLS;
    let mut i = 0;
    while i < cells.len() {
        cells[i].color = palette::MONO_INK;
        i += 1;
    }
    cells
}

/// The monochrome sibling of [`BODY_CELLS`]: identical geometry, every
/// cell in [`palette::MONO_INK`].
pub static BODY_CELLS_MONO: [BodyCell; BODY_CELL_COUNT] = mono_table();

/// Grid columns of the two eyes.
pub const EYE_COLUMNS: [i32; 2] = [14, 17];

/// Pseudo-3D rotation projection: foreshorten a grid column toward
/// [`BODY_CENTER_X`] by the cosine of the rotation angle.
///
/// With `rotation == 0` this is the identity for every integer column.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn project_column(x: i32, rotation: f64) -> i32 {
    (BODY_CENTER_X + (f64::from(x) - BODY_CENTER_X) * rotation.cos()).round() as i32
}

/// The (unrounded) body center row at time `t`: base height minus bob,
/// plus drift.
#[must_use]
pub fn center_y(t: f64, params: &MoodParams) -> f64 {
    let bob = pulse::pulse(t, params.pulse_freq) * params.bob_amp;
    let drift = (t * params.drift_speed * TAU).sin() * params.drift_amp;
    BASE_CENTER_Y - bob + drift
}

/// Emit the body cells for time `t` into `buf`.
///
/// `center` is the unrounded body center row (see [`center_y`]); it is
/// rounded once here so the whole body moves as a rigid unit.
#[allow(clippy::cast_possible_truncation)]
pub fn draw(
    t: f64,
    params: &MoodParams,
    center: f64,
    cells: &[BodyCell],
    buf: &mut CellBuf,
) {
    let rotation = t * params.rot_speed;
    let row = center.round() as i32;
    for cell in cells {
        buf.set(project_column(cell.x, rotation), row + cell.dy, cell.color);
    }
}

/// Emit the eye cells for time `t` into `buf`, after the body so they
/// override it.
///
/// Open eyes are two stacked rows per eye. Dormant collapses them to the
/// single upper row (the closed-eye look) regardless of `blinking`; a
/// blink suppresses open eyes entirely for the frames it lasts.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_eyes(
    t: f64,
    params: &MoodParams,
    center: f64,
    dormant: bool,
    blinking: bool,
    color: Rgb,
    buf: &mut CellBuf,
) {
    let rotation = t * params.rot_speed;
    let row = center.round() as i32;

    if dormant {
        for col in EYE_COLUMNS {
            buf.set(project_column(col, rotation), row - 1, color);
        }
        return;
    }

    if blinking {
        return;
    }

    for col in EYE_COLUMNS {
        let x = project_column(col, rotation);
        buf.set(x, row - 1, color);
        buf.set(x, row, color);
    }
}

/// Emit the thought-bubble accent: a trail of nub-colored cells bobbing
/// up and to the right of the head. Drawn last, for the contemplative
/// mood only.
#[allow(clippy::cast_possible_truncation)]
pub fn draw_thought_bubble(t: f64, center: f64, buf: &mut CellBuf) {
    let row = center.round() as i32;
    let bobble = (t * 2.0).sin() * 0.4;

    buf.set(20, row - 5, palette::NUB);

    let mid = (f64::from(row) - 7.0 + bobble).round() as i32;
    buf.set(21, mid, palette::NUB);
    buf.set(22, mid, palette::NUB);

    let cy = (f64::from(row) - 10.0 + bobble).round() as i32;
    buf.set(22, cy, palette::NUB);
    buf.set(23, cy, palette::NUB);
    buf.set(24, cy, palette::NUB);
    buf.set(22, cy - 1, palette::NUB);
    buf.set(23, cy - 1, palette::NUB);
    buf.set(24, cy - 1, palette::NUB);
    buf.set(23, cy - 2, palette::NUB);
}
