//! Rest pose — the animation evaluated at one fixed instant.
//!
//! Slow-refresh displays (e-paper) cannot afford continuous
//! recomputation, so they draw the pose the animation would have at
//! [`REST_TIME`] and leave it there. There is no separate static cell
//! table: the rest pose goes through exactly the same composition path
//! as an animated frame, so the two renderings can never diverge.

use crate::animator::{self, RenderStyle};
use crate::mood::Mood;
use crate::types::{Cell, CellBuf, PixelRect};

/// The fixed evaluation instant for the rest pose.
///
/// At t = 0 the pulse phase is 0 for every mood regardless of
/// frequency, so contraction, bob, drift, and rotation are all zero and
/// the tendril wave sits frozen at its phase-zero shape.
pub const REST_TIME: f64 = 0.0;

/// The ordered cell list of the rest pose for `mood`, in grid space.
///
/// Bit-identical to [`crate::Animator::frame`] on an animator whose
/// elapsed time equals [`REST_TIME`].
#[must_use]
pub fn rest_frame(mood: Mood) -> Vec<Cell> {
    rest_frame_styled(mood, RenderStyle::Aurora)
}

/// [`rest_frame`] in the monochrome style, for 1-bit displays.
#[must_use]
pub fn rest_frame_mono(mood: Mood) -> Vec<Cell> {
    rest_frame_styled(mood, RenderStyle::Mono)
}

/// The rest pose in an explicit style.
#[must_use]
pub fn rest_frame_styled(mood: Mood, style: RenderStyle) -> Vec<Cell> {
    let mut buf = CellBuf::new();
    animator::compose(REST_TIME, mood, false, style, &mut buf);
    buf.into_cells()
}

/// The rest pose mapped into pixel space, mirroring
/// [`crate::Animator::render`].
#[must_use]
pub fn rest_render(mood: Mood, origin_x: i32, origin_y: i32, cell_size: u32) -> Vec<PixelRect> {
    crate::types::scale_to_pixels(&rest_frame(mood), origin_x, origin_y, cell_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Animator;

    #[test]
    fn rest_matches_animator_at_rest_time() {
        for mood in Mood::ALL {
            let mut anim = Animator::new(mood);
            anim.advance(REST_TIME).expect("valid dt");
            assert_eq!(rest_frame(mood), anim.frame(), "mood {mood}");
        }
    }

    #[test]
    fn mono_rest_matches_mono_animator() {
        for mood in Mood::ALL {
            let anim = Animator::with_style(mood, RenderStyle::Mono);
            assert_eq!(rest_frame_mono(mood), anim.frame(), "mood {mood}");
        }
    }

    #[test]
    fn rest_render_scales_like_animator_render() {
        let anim = Animator::new(Mood::Subdued);
        assert_eq!(rest_render(Mood::Subdued, 4, 45, 1), anim.render(4, 45, 1));
    }
}
