//! Pulse clock — the asymmetric contraction cycle.
//!
//! One cycle of the mascot's "squeeze" partitions into fixed fractions:
//!
//! ```text
//! contraction
//!  1 ┤      ____
//!    │    /     \
//!    │   /        \__
//!  0 ┼──┴────────────┴───────── phase
//!    0  rise hold decay   idle  1
//!       0.25 0.10 0.30    0.35
//! ```
//!
//! Fast ease-in contraction, brief hold at full squeeze, quadratic
//! release, then a long settle at zero. Both functions here are pure in
//! (time, frequency): every dependent computation calls them
//! independently and always observes the same value.

use std::f64::consts::FRAC_PI_2;

/// Fraction of the cycle spent contracting.
pub const RISE_FRACTION: f64 = 0.25;

/// Fraction of the cycle held at full contraction.
pub const HOLD_FRACTION: f64 = 0.10;

/// Fraction of the cycle spent releasing back to zero.
pub const DECAY_FRACTION: f64 = 0.30;

/// Fractional position within the current pulse cycle, in `[0, 1)`.
///
/// Negative time wraps so the result is always non-negative.
#[must_use]
pub fn phase(t: f64, freq: f64) -> f64 {
    let p = (t * freq).fract();
    if p < 0.0 { p + 1.0 } else { p }
}

/// Contraction at time `t` for a cycle of the given frequency, in
/// `[0, 1]` where 1 is peak squeeze.
#[must_use]
pub fn pulse(t: f64, freq: f64) -> f64 {
    let phase = phase(t, freq);

    if phase < RISE_FRACTION {
        let u = phase / RISE_FRACTION;
        return (u * FRAC_PI_2).sin();
    }

    let hold_end = RISE_FRACTION + HOLD_FRACTION;
    if phase < hold_end {
        return 1.0;
    }

    if phase < hold_end + DECAY_FRACTION {
        let u = (phase - hold_end) / DECAY_FRACTION;
        return 1.0 - u * u;
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn known_waypoints_at_half_hertz() {
        // Cycle length 2s: t maps to phase t/2.
        assert!((pulse(0.0, 0.5) - 0.0).abs() < EPS);

        // phase 0.0625, inside the rise: sin(0.25 · π/2)
        let expected = (0.25 * FRAC_PI_2).sin();
        assert!((pulse(0.125, 0.5) - expected).abs() < EPS);
        assert!((expected - 0.382_683_432).abs() < 1e-6);

        // phase 0.3, inside the hold
        assert!((pulse(0.6, 0.5) - 1.0).abs() < EPS);

        // phase 0.5, halfway through the decay: 1 − 0.5²
        assert!((pulse(1.0, 0.5) - 0.75).abs() < EPS);

        // phase 0.7, settled
        assert!((pulse(1.4, 0.5) - 0.0).abs() < EPS);
    }

    #[test]
    fn phase_wraps_negative_time() {
        let p = phase(-0.3, 1.0);
        assert!((0.0..1.0).contains(&p));
        assert!((p - 0.7).abs() < EPS);
    }

    #[test]
    fn rise_peaks_where_hold_begins() {
        let end_of_rise = pulse(RISE_FRACTION - 1e-12, 1.0);
        assert!((end_of_rise - 1.0).abs() < 1e-6);
        assert!((pulse(RISE_FRACTION, 1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn decay_lands_on_zero() {
        let end = RISE_FRACTION + HOLD_FRACTION + DECAY_FRACTION;
        assert!((pulse(end - 1e-12, 1.0) - 0.0).abs() < 1e-6);
        assert!((pulse(end, 1.0) - 0.0).abs() < EPS);
    }
}
