//! Tendril solver — arc-profile integration and radial projection.
//!
//! One generic tendril profile is built per frame by forward-integrating
//! a bending curve over a fixed number of segments, then reprojected
//! around the body for each of the eight tendrils. The projection is the
//! cheap pseudo-3D trick: all tendrils share the same radial profile,
//! each rotated to its own angle, with the whole fan slowly revolving
//! when the mood calls for it.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::mood::MoodParams;
use crate::pulse;
use crate::types::{BODY_CENTER_X, CellBuf, Rgb, TENDRIL_TOP_OFFSET};

/// Number of tendrils around the body. Shared by every mood.
pub const TENDRIL_COUNT: usize = 8;

/// Number of integration segments per tendril. Shared by every mood.
pub const SEGMENT_COUNT: usize = 28;

/// Integration step size, in grid units.
pub const SEGMENT_LENGTH: f64 = 0.82;

/// Total angular sweep a tendril bends through from vertical, before
/// the per-mood arc multiplier.
pub const BASE_ARC: f64 = PI * 1.1;

/// How strongly contraction pulls the tip inward, per unit of position
/// along the tendril.
const CONTRACTION_PULL: f64 = 0.15;

/// Spatial frequency of the propulsive wave along the tendril.
const WAVE_TURNS: f64 = 2.5 * PI;

/// The 2D `(radius, height)` arc profile of one generic tendril.
///
/// Element 0 is always exactly `(0, 0)` by construction — no
/// displacement happens before the first integration step — and is not
/// rendered, to avoid double-drawing the body center.
pub type ArcProfile = [[f64; 2]; SEGMENT_COUNT + 1];

/// Build the arc profile for the given contraction and wave phase.
///
/// `wave_phase` is in radians (one pulse cycle spans `2π`). Bending
/// eases super-linearly (`u^1.3`) so the tip curls harder than the
/// base, and the lateral wave flexes cubically (`u³`) so the base barely
/// moves while the tip whips.
#[must_use]
pub fn arc_profile(contraction: f64, wave_phase: f64, params: &MoodParams) -> ArcProfile {
    let arc = BASE_ARC * params.arc_mult;
    let mut profile = [[0.0; 2]; SEGMENT_COUNT + 1];

    let mut radius = 0.0;
    let mut height = 0.0;

    for s in 0..SEGMENT_COUNT {
        let u = s as f64 / (SEGMENT_COUNT - 1) as f64;
        let bend = u.powf(1.3);
        let base_angle = FRAC_PI_2 - arc * bend;
        let angle = base_angle - contraction * CONTRACTION_PULL * u;

        radius += angle.cos() * SEGMENT_LENGTH;
        height += angle.sin() * SEGMENT_LENGTH;

        let flex = u * u * u;
        let wave = (wave_phase - WAVE_TURNS * u).sin() * params.wave_amp * flex;

        // Displace perpendicular to the local tangent.
        profile[s + 1] = [radius - wave * angle.sin(), height + wave * angle.cos()];
    }

    profile
}

/// The angle of each tendril for a given rotation offset.
#[must_use]
pub fn spread_angles(rotation: f64) -> [f64; TENDRIL_COUNT] {
    let mut angles = [0.0; TENDRIL_COUNT];
    for (i, slot) in angles.iter_mut().enumerate() {
        *slot = (i as f64 / TENDRIL_COUNT as f64) * TAU + rotation;
    }
    angles
}

/// Solve and emit all eight tendrils for time `t` into `buf`.
///
/// `center_y` is the (unrounded) body center row for this frame; the
/// tendrils attach [`TENDRIL_TOP_OFFSET`] above it. Coordinates round to
/// the nearest grid cell per segment; the slight stair-stepping at small
/// cell sizes is part of the look.
pub fn solve(t: f64, params: &MoodParams, center_y: f64, color: Rgb, buf: &mut CellBuf) {
    let contraction = pulse::pulse(t, params.pulse_freq);
    let wave_phase = pulse::phase(t, params.pulse_freq) * TAU;
    let profile = arc_profile(contraction, wave_phase, params);

    let top_y = center_y - TENDRIL_TOP_OFFSET;
    let angles = spread_angles(t * params.rot_speed);

    for theta in angles {
        for s in 0..SEGMENT_COUNT {
            let [radius, height] = profile[s + 1];
            let x = BODY_CENTER_X + radius * theta.cos();
            let mut y = top_y - height;

            if params.slouch > 0.0 {
                // Sag grows quadratically toward the tip and is maximal
                // for tendrils pointing sideways.
                let sag = (s + 1) as f64 / SEGMENT_COUNT as f64;
                y += params.slouch * theta.sin().abs() * sag * sag;
            }

            #[allow(clippy::cast_possible_truncation)]
            buf.set(x.round() as i32, y.round() as i32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::Mood;
    use crate::palette;

    #[test]
    fn profile_root_is_origin() {
        for mood in Mood::ALL {
            for t in [0.0, 0.37, 12.5, -3.0] {
                let params = mood.params();
                let contraction = pulse::pulse(t, params.pulse_freq);
                let wave_phase = pulse::phase(t, params.pulse_freq) * TAU;
                let profile = arc_profile(contraction, wave_phase, params);
                assert_eq!(profile[0], [0.0, 0.0]);
            }
        }
    }

    #[test]
    fn first_segment_rises_nearly_vertically() {
        // u = 0 at the base: angle is exactly π/2 minus the contraction
        // pull, which is also zero at the base, so the first step is
        // straight up.
        let profile = arc_profile(1.0, 0.0, Mood::Neutral.params());
        let [r, h] = profile[1];
        assert!(r.abs() < 1e-9);
        assert!((h - SEGMENT_LENGTH).abs() < 1e-9);
    }

    #[test]
    fn eight_even_angles_without_rotation() {
        let angles = spread_angles(0.0);
        for (i, theta) in angles.iter().enumerate() {
            let expected = i as f64 * TAU / 8.0;
            assert!((theta - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn rotation_offsets_every_angle() {
        let base = spread_angles(0.0);
        let rotated = spread_angles(0.3);
        for (b, r) in base.iter().zip(rotated.iter()) {
            assert!((r - b - 0.3).abs() < 1e-12);
        }
    }

    #[test]
    fn solve_emits_at_most_eight_by_twenty_eight() {
        let mut buf = CellBuf::new();
        solve(0.0, Mood::Neutral.params(), 18.0, palette::TENDRIL, &mut buf);
        // Off-grid cells are clipped, so "at most".
        assert!(buf.len() <= TENDRIL_COUNT * SEGMENT_COUNT);
        assert!(!buf.is_empty());
    }

    #[test]
    fn slouch_only_lowers_cells() {
        // Same instant, same mood shape, with and without slouch: sagging
        // must never raise a segment.
        let drooping = *Mood::Subdued.params();
        let mut upright = drooping;
        upright.slouch = 0.0;

        let mut buf_droop = CellBuf::new();
        let mut buf_up = CellBuf::new();
        solve(0.2, &drooping, 18.0, palette::TENDRIL, &mut buf_droop);
        solve(0.2, &upright, 18.0, palette::TENDRIL, &mut buf_up);

        let lowest = |cells: Vec<crate::types::Cell>| {
            cells.iter().map(|c| c.pos.y).max().unwrap_or(0)
        };
        assert!(lowest(buf_droop.into_cells()) >= lowest(buf_up.into_cells()));
    }
}
