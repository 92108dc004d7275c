//! The display driver — one animator, one sink, one cadence.
//!
//! A host loop owns a `DisplayDriver` and calls [`DisplayDriver::step`]
//! once per frame (or lets [`DisplayDriver::run_for`] pace itself with
//! a plain sleep — no internal timers, threads, or callbacks). Each
//! step advances the clock, updates the blink flag, renders, and pushes
//! the frame to the sink unless its content is identical to the last
//! presented one.

use tracing::{debug, info};

use wisp_core::animator::RenderStyle;
use wisp_core::error::Result;
use wisp_core::rest;
use wisp_core::types::{PixelRect, Rgb, scale_to_pixels};
use wisp_core::{Animator, Mood};

use crate::activity::{self, RoomActivity};
use crate::blink::BlinkSchedule;
use crate::config::DisplayConfig;
use crate::refresh::{self, RefreshPolicy};
use crate::sink::FrameSink;

/// Background color behind the mascot.
const BACKGROUND: Rgb = Rgb::gray(255);

/// Drives one mascot on one sink.
#[derive(Debug)]
pub struct DisplayDriver<S: FrameSink> {
    animator: Animator,
    sink: S,
    config: DisplayConfig,
    blink: BlinkSchedule,
    refresh: RefreshPolicy,
    last_presented: Option<u64>,
}

impl<S: FrameSink> DisplayDriver<S> {
    /// Create a driver starting in the given mood.
    #[must_use]
    pub fn new(sink: S, config: DisplayConfig, mood: Mood) -> Self {
        let style = if config.monochrome {
            RenderStyle::Mono
        } else {
            RenderStyle::Aurora
        };
        Self {
            animator: Animator::with_style(mood, style),
            blink: BlinkSchedule::new(mood, config.blink_seed),
            refresh: RefreshPolicy::new(config.full_refresh_every),
            sink,
            config,
            last_presented: None,
        }
    }

    /// The underlying animator, read-only.
    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// The underlying sink, read-only.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the driver, returning the sink.
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Apply the configured mood policy to an observed activity
    /// snapshot.
    pub fn observe(&mut self, activity: &RoomActivity) {
        let mood = activity::mood_for(activity, &self.config.mood_policy);
        self.set_mood(mood);
    }

    /// Set the mood directly (hosts use this for states the activity
    /// signal cannot express, like contemplative).
    pub fn set_mood(&mut self, mood: Mood) {
        if mood != self.animator.mood() {
            debug!(from = %self.animator.mood(), to = %mood, "mood change");
            self.blink.set_mood(mood);
        }
        self.animator.set_mood(mood);
    }

    /// Advance by `dt` seconds and render one frame. Returns whether
    /// the frame was actually presented (unchanged frames are skipped).
    ///
    /// # Errors
    /// Propagates invalid `dt` from the animator and sink failures from
    /// `present`.
    pub fn step(&mut self, dt: f64) -> Result<bool> {
        self.animator.advance(dt)?;
        self.animator.set_blinking(self.blink.update(dt));

        let rects = if self.config.animate {
            self.animator.render(
                self.config.origin_x,
                self.config.origin_y,
                self.config.cell_size,
            )
        } else {
            self.rest_rects()
        };

        self.present_if_changed(&rects)
    }

    /// Render the rest pose once, regardless of the animate setting.
    /// Slow panels call this on mood changes and skip `step` entirely.
    ///
    /// # Errors
    /// Propagates sink failures from `present`.
    pub fn render_rest(&mut self) -> Result<bool> {
        let rects = self.rest_rects();
        self.present_if_changed(&rects)
    }

    /// Run `frames` steps at the configured cadence, sleeping between
    /// frames. Intended for simple hosts; anything with its own event
    /// loop calls [`DisplayDriver::step`] itself.
    ///
    /// # Errors
    /// Stops at the first failing step.
    pub fn run_for(&mut self, frames: u64) -> Result<()> {
        let dt = self.config.frame_dt();
        info!(
            frames,
            interval_ms = self.config.frame_interval_ms,
            mood = %self.animator.mood(),
            "display loop starting"
        );
        for _ in 0..frames {
            self.step(dt)?;
            std::thread::sleep(self.config.frame_interval());
        }
        Ok(())
    }

    fn rest_rects(&self) -> Vec<PixelRect> {
        let frame = rest::rest_frame_styled(self.animator.mood(), self.animator.style());
        scale_to_pixels(
            &frame,
            self.config.origin_x,
            self.config.origin_y,
            self.config.cell_size,
        )
    }

    fn present_if_changed(&mut self, rects: &[PixelRect]) -> Result<bool> {
        let hash = refresh::frame_hash(rects);
        if self.last_presented == Some(hash) {
            debug!("frame unchanged, skipping refresh");
            return Ok(false);
        }

        self.sink.clear(BACKGROUND);
        for rect in rects {
            self.sink.fill(rect);
        }
        let kind = self.refresh.next();
        self.sink.present(kind)?;
        self.last_presented = Some(hash);
        debug!(cells = rects.len(), ?kind, "frame presented");
        Ok(true)
    }
}
