//! Refresh policy for slow panels.
//!
//! E-paper modules ghost if driven with partial refreshes forever, so a
//! full refresh is forced every N updates. Independently, a frame whose
//! content is identical to the last presented one is skipped entirely —
//! redrawing an unchanged e-paper frame costs seconds and visible
//! flashing for nothing.

use std::hash::{DefaultHasher, Hash, Hasher};

use wisp_core::types::PixelRect;

/// How a frame should be pushed to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    /// Full redraw, clearing ghosting.
    Full,
    /// Fast partial update.
    Partial,
}

/// Decides full vs. partial for each presented frame.
#[derive(Debug, Clone)]
pub struct RefreshPolicy {
    full_every: u32,
    since_full: u32,
}

impl RefreshPolicy {
    /// Force a full refresh every `full_every` presented frames. The
    /// first frame is always full.
    #[must_use]
    pub fn new(full_every: u32) -> Self {
        Self {
            full_every: full_every.max(1),
            since_full: 0,
        }
    }

    /// The kind to use for the next presented frame.
    pub fn next(&mut self) -> RefreshKind {
        if self.since_full == 0 {
            self.since_full = 1;
            return RefreshKind::Full;
        }
        self.since_full += 1;
        if self.since_full > self.full_every {
            self.since_full = 1;
            return RefreshKind::Full;
        }
        RefreshKind::Partial
    }
}

/// Content hash of a rendered frame, for change detection.
#[must_use]
pub fn frame_hash(rects: &[PixelRect]) -> u64 {
    let mut hasher = DefaultHasher::new();
    rects.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wisp_core::types::Rgb;

    #[test]
    fn first_refresh_is_full() {
        let mut policy = RefreshPolicy::new(5);
        assert_eq!(policy.next(), RefreshKind::Full);
        assert_eq!(policy.next(), RefreshKind::Partial);
    }

    #[test]
    fn full_refresh_recurs_on_schedule() {
        let mut policy = RefreshPolicy::new(3);
        let kinds: Vec<_> = (0..8).map(|_| policy.next()).collect();
        let fulls = kinds.iter().filter(|k| **k == RefreshKind::Full).count();
        assert_eq!(kinds[0], RefreshKind::Full);
        // Every 3 partial-capable slots roll back over to full.
        assert!(fulls >= 2);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let mut policy = RefreshPolicy::new(0);
        // Degenerate config: every frame full, never a division or hang.
        assert_eq!(policy.next(), RefreshKind::Full);
        assert_eq!(policy.next(), RefreshKind::Full);
    }

    #[test]
    fn hash_distinguishes_content() {
        let a = vec![PixelRect {
            x: 0,
            y: 0,
            size: 1,
            color: Rgb::gray(0),
        }];
        let mut b = a.clone();
        assert_eq!(frame_hash(&a), frame_hash(&b));
        b[0].x = 1;
        assert_ne!(frame_hash(&a), frame_hash(&b));
    }
}
