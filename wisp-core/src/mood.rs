//! Mood table — discrete moods and their motion coefficients.
//!
//! Moods are data variants, not behaviors: a closed enum selecting one
//! of five immutable coefficient records. There is no interpolation
//! between moods — a change takes full effect on the next frame. The
//! pop is intentional; the engine targets slow-refresh panels where a
//! cross-fade would never be visible.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The mascot's mood. Selected by the host from an externally observed
/// activity signal; the engine only consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// Credible idle resting state: moderate pulse, small motion.
    Neutral,
    /// Energetic: fast pulse, big bob and wave, slow body rotation.
    Upbeat,
    /// Deflated: slow pulse, drooping tendrils, wide arc.
    Subdued,
    /// Holding position while working something out: zero drift.
    Contemplative,
    /// Nearly still, eyes closed.
    Dormant,
}

/// Motion coefficients for one mood. All records are `'static`
/// constants compiled into the engine; nothing here changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodParams {
    /// Pulse cycles per second.
    pub pulse_freq: f64,
    /// Vertical bob, in grid units at peak contraction.
    pub bob_amp: f64,
    /// Lateral tendril wave, in grid units at the tip.
    pub wave_amp: f64,
    /// Horizontal drift cycles per second.
    pub drift_speed: f64,
    /// Horizontal drift, in grid units.
    pub drift_amp: f64,
    /// Pseudo-3D rotation, in radians per second.
    pub rot_speed: f64,
    /// Scale on the total angular sweep of a tendril.
    pub arc_mult: f64,
    /// Tendril sag, in grid units at the tip of a sideways tendril.
    pub slouch: f64,
}

static NEUTRAL: MoodParams = MoodParams {
    pulse_freq: 0.5,
    bob_amp: 1.5,
    wave_amp: 3.0,
    drift_speed: 0.12,
    drift_amp: 0.6,
    rot_speed: 0.0,
    arc_mult: 1.0,
    slouch: 0.0,
};

static UPBEAT: MoodParams = MoodParams {
    pulse_freq: 0.8,
    bob_amp: 2.5,
    wave_amp: 4.5,
    drift_speed: 0.25,
    drift_amp: 1.0,
    rot_speed: 0.6,
    arc_mult: 0.9,
    slouch: 0.0,
};

static SUBDUED: MoodParams = MoodParams {
    pulse_freq: 0.25,
    bob_amp: 0.8,
    wave_amp: 1.5,
    drift_speed: 0.08,
    drift_amp: 0.3,
    rot_speed: 0.0,
    arc_mult: 1.35,
    slouch: 3.0,
};

static CONTEMPLATIVE: MoodParams = MoodParams {
    pulse_freq: 0.4,
    bob_amp: 1.2,
    wave_amp: 2.0,
    drift_speed: 0.0,
    drift_amp: 0.0,
    rot_speed: 0.0,
    arc_mult: 1.0,
    slouch: 0.0,
};

static DORMANT: MoodParams = MoodParams {
    pulse_freq: 0.15,
    bob_amp: 0.4,
    wave_amp: 1.0,
    drift_speed: 0.06,
    drift_amp: 0.4,
    rot_speed: 0.0,
    arc_mult: 1.1,
    slouch: 0.0,
};

impl Mood {
    /// All moods, in display order.
    pub const ALL: [Mood; 5] = [
        Mood::Neutral,
        Mood::Upbeat,
        Mood::Subdued,
        Mood::Contemplative,
        Mood::Dormant,
    ];

    /// The coefficient record for this mood.
    #[must_use]
    pub fn params(self) -> &'static MoodParams {
        match self {
            Mood::Neutral => &NEUTRAL,
            Mood::Upbeat => &UPBEAT,
            Mood::Subdued => &SUBDUED,
            Mood::Contemplative => &CONTEMPLATIVE,
            Mood::Dormant => &DORMANT,
        }
    }

    /// Look up a mood by name, falling back to [`Mood::Neutral`] for
    /// anything unrecognized. The animation must always render
    /// something, so this never fails.
    #[must_use]
    pub fn from_name(name: &str) -> Mood {
        match name.trim().to_ascii_lowercase().as_str() {
            "neutral" => Mood::Neutral,
            "upbeat" => Mood::Upbeat,
            "subdued" => Mood::Subdued,
            "contemplative" => Mood::Contemplative,
            "dormant" => Mood::Dormant,
            other => {
                tracing::warn!(mood = other, "unknown mood name, falling back to neutral");
                Mood::Neutral
            }
        }
    }

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Mood::Neutral => "neutral",
            Mood::Upbeat => "upbeat",
            Mood::Subdued => "subdued",
            Mood::Contemplative => "contemplative",
            Mood::Dormant => "dormant",
        }
    }
}

impl Default for Mood {
    fn default() -> Self {
        Mood::Neutral
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mood {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Mood::from_name(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_names_fall_back_to_neutral() {
        assert_eq!(Mood::from_name("effervescent"), Mood::Neutral);
        assert_eq!(Mood::from_name(""), Mood::Neutral);
        assert_eq!(Mood::from_name("  UPBEAT "), Mood::Upbeat);
    }

    #[test]
    fn names_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_name(mood.name()), mood);
        }
    }

    #[test]
    fn upbeat_moves_more_than_neutral() {
        let n = Mood::Neutral.params();
        let u = Mood::Upbeat.params();
        assert!(u.pulse_freq > n.pulse_freq);
        assert!(u.bob_amp > n.bob_amp);
        assert!(u.wave_amp > n.wave_amp);
        assert!(u.rot_speed > 0.0);
        assert!(u.arc_mult < n.arc_mult, "upbeat tucks its tendrils in");
    }

    #[test]
    fn subdued_droops() {
        let n = Mood::Neutral.params();
        let s = Mood::Subdued.params();
        assert!(s.pulse_freq < n.pulse_freq);
        assert!(s.bob_amp < n.bob_amp);
        assert!(s.arc_mult > n.arc_mult, "subdued splays its tendrils out");
        assert!(s.slouch > 0.0);
    }

    #[test]
    fn contemplative_holds_position() {
        let c = Mood::Contemplative.params();
        assert_eq!(c.drift_speed, 0.0);
        assert_eq!(c.drift_amp, 0.0);
    }

    #[test]
    fn dormant_is_slowest() {
        let d = Mood::Dormant.params();
        for mood in Mood::ALL {
            assert!(d.pulse_freq <= mood.params().pulse_freq);
        }
    }

    #[test]
    fn serde_names_are_lowercase() {
        let json = serde_json::to_string(&Mood::Contemplative).expect("serialize");
        assert_eq!(json, "\"contemplative\"");
    }
}
