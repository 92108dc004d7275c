//! The mascot's aurora palette.
//!
//! Process-wide read-only constants; the geometry responds to mood and
//! time, the palette never does. Sinks that cannot show color render the
//! monochrome table from [`crate::body`] in [`MONO_INK`] instead.

use crate::types::Rgb;

/// Core of the cross body.
pub const CORE: Rgb = Rgb::new(0xee, 0xf0, 0xff);

/// Upper arm of the cross.
pub const ARM_UP: Rgb = Rgb::new(0x79, 0x46, 0xff);

/// Lower arm of the cross.
pub const ARM_DOWN: Rgb = Rgb::new(0x39, 0x3c, 0xf5);

/// Left arm of the cross.
pub const ARM_LEFT: Rgb = Rgb::new(0xe7, 0x2b, 0x76);

/// Right arm of the cross.
pub const ARM_RIGHT: Rgb = Rgb::new(0x15, 0xd1, 0xff);

/// The small nubs capping the vertical arms.
pub const NUB: Rgb = Rgb::new(0x15, 0xd1, 0xff);

/// Tendril cells.
pub const TENDRIL: Rgb = Rgb::new(0x5e, 0xc8, 0xe6);

/// Eye cells — near-black, drawn last so they override body cells.
pub const EYE: Rgb = Rgb::new(0x0a, 0x0a, 0x12);

/// Ink color for 1-bit displays.
pub const MONO_INK: Rgb = Rgb::gray(0);
