//! Blink scheduling.
//!
//! Blinking is host policy, not engine math: the engine only exposes a
//! boolean, and this scheduler flips it at randomized intervals tuned
//! per mood. A quick mood blinks often and briefly; a low mood blinks
//! rarely and slowly; dormant never blinks (the eyes are already
//! closed). The RNG is seedable so displays under test stay
//! reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wisp_core::Mood;

/// Blink timing for one mood, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlinkWindow {
    /// Shortest gap between blinks.
    pub min_delay: f64,
    /// Longest gap between blinks.
    pub max_delay: f64,
    /// How long the eyes stay shut.
    pub duration: f64,
}

impl BlinkWindow {
    /// Blink timing for `mood`, or `None` if the mood never blinks.
    #[must_use]
    pub fn for_mood(mood: Mood) -> Option<Self> {
        let (min_delay, max_delay, duration) = match mood {
            Mood::Neutral => (3.0, 5.0, 0.15),
            Mood::Upbeat => (1.2, 2.5, 0.08),
            Mood::Subdued => (5.0, 9.0, 0.35),
            Mood::Contemplative => (4.0, 7.0, 0.20),
            Mood::Dormant => return None,
        };
        Some(Self {
            min_delay,
            max_delay,
            duration,
        })
    }
}

/// Drives the blink flag for one display.
#[derive(Debug)]
pub struct BlinkSchedule {
    rng: StdRng,
    window: Option<BlinkWindow>,
    until_next: f64,
    blink_left: f64,
}

impl BlinkSchedule {
    /// Create a schedule for `mood`. Pass a seed to make the timing
    /// reproducible; otherwise it is drawn from the system.
    #[must_use]
    pub fn new(mood: Mood, seed: Option<u64>) -> Self {
        let mut schedule = Self {
            rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            window: None,
            until_next: 0.0,
            blink_left: 0.0,
        };
        schedule.set_mood(mood);
        schedule
    }

    /// Re-tune for a new mood. Any in-progress blink is cut short; the
    /// next one is drawn from the new mood's window.
    pub fn set_mood(&mut self, mood: Mood) {
        self.window = BlinkWindow::for_mood(mood);
        self.blink_left = 0.0;
        self.until_next = self.draw_delay();
    }

    /// Advance by `dt` seconds and return whether the eyes should be
    /// shut this frame.
    pub fn update(&mut self, dt: f64) -> bool {
        let Some(window) = self.window else {
            return false;
        };

        if self.blink_left > 0.0 {
            self.blink_left -= dt;
            if self.blink_left > 0.0 {
                return true;
            }
            self.until_next = self.draw_delay();
            return false;
        }

        self.until_next -= dt;
        if self.until_next <= 0.0 {
            self.blink_left = window.duration;
            return true;
        }
        false
    }

    fn draw_delay(&mut self) -> f64 {
        match self.window {
            Some(w) => self.rng.gen_range(w.min_delay..=w.max_delay),
            None => f64::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dormant_never_blinks() {
        let mut schedule = BlinkSchedule::new(Mood::Dormant, Some(7));
        for _ in 0..10_000 {
            assert!(!schedule.update(0.083));
        }
    }

    #[test]
    fn awake_moods_blink_eventually() {
        let mut schedule = BlinkSchedule::new(Mood::Neutral, Some(42));
        let blinked = (0..1000).any(|_| schedule.update(0.083));
        assert!(blinked, "no blink within ~83 simulated seconds");
    }

    #[test]
    fn same_seed_same_timing() {
        let mut a = BlinkSchedule::new(Mood::Upbeat, Some(9));
        let mut b = BlinkSchedule::new(Mood::Upbeat, Some(9));
        for _ in 0..2000 {
            assert_eq!(a.update(0.05), b.update(0.05));
        }
    }

    #[test]
    fn blink_lasts_roughly_its_duration() {
        let mut schedule = BlinkSchedule::new(Mood::Subdued, Some(3));
        let dt = 0.05;
        let mut longest = 0;
        let mut current = 0;
        for _ in 0..10_000 {
            if schedule.update(dt) {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        // Subdued blinks for 0.35s ≈ 7 frames at 20fps.
        assert!(longest >= 5, "blinks too short: {longest} frames");
        assert!(longest <= 10, "blinks too long: {longest} frames");
    }
}
