//! The animator — stateful orchestrator over the pure pose math.
//!
//! An [`Animator`] owns exactly two pieces of animation state: elapsed
//! time and the current mood. The driving display loop advances time by
//! its own frame delta and asks for a frame; everything else is
//! recomputed from scratch on every call. One animator per display —
//! mood and elapsed time are never shared between renderers.

use crate::body;
use crate::error::{Result, WispError};
use crate::mood::Mood;
use crate::palette;
use crate::tendril;
use crate::types::{Cell, CellBuf, PixelRect};

/// Which cell tables and colors a frame is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Full aurora palette.
    #[default]
    Aurora,
    /// Single ink color for 1-bit displays.
    Mono,
}

/// Compose one complete frame at time `t` into `buf`, in draw order:
/// tendrils, body, eyes, then the thought-bubble accent when
/// contemplative. Later cells override earlier ones at the same
/// position.
pub(crate) fn compose(t: f64, mood: Mood, blinking: bool, style: RenderStyle, buf: &mut CellBuf) {
    let params = mood.params();
    let center = body::center_y(t, params);

    let (body_cells, tendril_color, eye_color): (&[body::BodyCell], _, _) = match style {
        RenderStyle::Aurora => (&body::BODY_CELLS, palette::TENDRIL, palette::EYE),
        RenderStyle::Mono => (&body::BODY_CELLS_MONO, palette::MONO_INK, palette::MONO_INK),
    };

    tendril::solve(t, params, center, tendril_color, buf);
    body::draw(t, params, center, body_cells, buf);
    body::draw_eyes(
        t,
        params,
        center,
        mood == Mood::Dormant,
        blinking,
        eye_color,
        buf,
    );

    if mood == Mood::Contemplative {
        body::draw_thought_bubble(t, center, buf);
    }
}

/// Stateful frame producer for one display.
#[derive(Debug, Clone)]
pub struct Animator {
    elapsed: f64,
    mood: Mood,
    blinking: bool,
    style: RenderStyle,
}

impl Animator {
    /// Create an animator at time zero in the given mood.
    #[must_use]
    pub fn new(mood: Mood) -> Self {
        Self {
            elapsed: 0.0,
            mood,
            blinking: false,
            style: RenderStyle::default(),
        }
    }

    /// Create an animator rendering in the given style.
    #[must_use]
    pub fn with_style(mood: Mood, style: RenderStyle) -> Self {
        Self {
            style,
            ..Self::new(mood)
        }
    }

    /// Advance the animation clock.
    ///
    /// # Errors
    /// Returns [`WispError::InvalidTimeStep`] for a negative or
    /// non-finite `dt`, before any state changes.
    pub fn advance(&mut self, dt: f64) -> Result<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(WispError::InvalidTimeStep { dt });
        }
        self.elapsed += dt;
        Ok(())
    }

    /// Replace the current mood. Takes full effect on the next frame;
    /// there is no blending with the previous mood.
    pub fn set_mood(&mut self, mood: Mood) {
        self.mood = mood;
    }

    /// [`Animator::set_mood`] by name, with the usual neutral fallback
    /// for unknown names.
    pub fn set_mood_name(&mut self, name: &str) {
        self.mood = Mood::from_name(name);
    }

    /// Set the host-driven blink flag. While blinking, open eyes are
    /// not drawn; the dormant closed-eye row is unaffected.
    pub fn set_blinking(&mut self, blinking: bool) {
        self.blinking = blinking;
    }

    /// The current mood.
    #[must_use]
    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Seconds of animation accumulated so far.
    #[must_use]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Whether a blink is in progress.
    #[must_use]
    pub fn is_blinking(&self) -> bool {
        self.blinking
    }

    /// The render style.
    #[must_use]
    pub fn style(&self) -> RenderStyle {
        self.style
    }

    /// Compute the complete ordered cell list for the current instant,
    /// in grid space.
    #[must_use]
    pub fn frame(&self) -> Vec<Cell> {
        let mut buf = CellBuf::new();
        compose(self.elapsed, self.mood, self.blinking, self.style, &mut buf);
        buf.into_cells()
    }

    /// [`Animator::frame`] mapped into pixel space: each grid cell
    /// becomes a filled square of `cell_size` pixels at
    /// `origin + grid · cell_size`. The animator never touches a pixel
    /// buffer itself — the sink fills these rectangles in order.
    #[must_use]
    pub fn render(&self, origin_x: i32, origin_y: i32, cell_size: u32) -> Vec<PixelRect> {
        crate::types::scale_to_pixels(&self.frame(), origin_x, origin_y, cell_size)
    }
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(Mood::Neutral)
    }
}
