//! Display configuration, loadable from TOML.
//!
//! Everything a deployment tunes lives here: cell scale, cadence,
//! whether to animate at all, and the activity → mood thresholds. The
//! engine-side tables (mood coefficients, body cells, palette) are
//! compiled in and deliberately not configurable — they are the
//! mascot's identity, not deployment tuning.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use wisp_core::WispError;
use wisp_core::error::Result;

use crate::activity::MoodPolicy;

/// Top-level display configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Side length of one grid cell, in pixels. 1 for tiny e-paper
    /// panels, 6 for a web-sized canvas.
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,
    /// Left edge of the mascot, in pixels.
    #[serde(default)]
    pub origin_x: i32,
    /// Top edge of the mascot, in pixels.
    #[serde(default)]
    pub origin_y: i32,
    /// Frame cadence, in milliseconds. 83 ≈ 12fps.
    #[serde(default = "default_frame_interval")]
    pub frame_interval_ms: u64,
    /// Continuous animation, or the fixed rest pose for panels too slow
    /// to redraw.
    #[serde(default = "default_true")]
    pub animate: bool,
    /// Render monochrome (1-bit panels) instead of the full palette.
    #[serde(default)]
    pub monochrome: bool,
    /// Force a full refresh after this many partial ones.
    #[serde(default = "default_full_refresh")]
    pub full_refresh_every: u32,
    /// Fixed seed for blink timing; random when absent.
    #[serde(default)]
    pub blink_seed: Option<u64>,
    /// Activity → mood thresholds.
    #[serde(default)]
    pub mood_policy: MoodPolicy,
}

fn default_cell_size() -> u32 {
    1
}

fn default_frame_interval() -> u64 {
    83
}

fn default_true() -> bool {
    true
}

fn default_full_refresh() -> u32 {
    20
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_size: default_cell_size(),
            origin_x: 0,
            origin_y: 0,
            frame_interval_ms: default_frame_interval(),
            animate: true,
            monochrome: false,
            full_refresh_every: default_full_refresh(),
            blink_seed: None,
            mood_policy: MoodPolicy::default(),
        }
    }
}

impl DisplayConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `WispError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| WispError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// The frame cadence as a [`Duration`].
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// The frame cadence in seconds, as fed to the animator.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn frame_dt(&self) -> f64 {
        self.frame_interval_ms as f64 / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config = DisplayConfig::from_toml("").expect("empty config");
        assert_eq!(config.cell_size, 1);
        assert_eq!(config.frame_interval_ms, 83);
        assert!(config.animate);
        assert!(!config.monochrome);
        assert_eq!(config.mood_policy.upbeat_at, 3);
    }

    #[test]
    fn partial_toml_overrides_some_fields() {
        let config = DisplayConfig::from_toml(
            r#"
            cell_size = 6
            animate = false

            [mood_policy]
            upbeat_at = 2
            "#,
        )
        .expect("valid config");
        assert_eq!(config.cell_size, 6);
        assert!(!config.animate);
        assert_eq!(config.mood_policy.upbeat_at, 2);
        // Untouched fields keep their defaults.
        assert_eq!(config.full_refresh_every, 20);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = DisplayConfig::from_toml("cell_size = \"six\"");
        assert!(matches!(err, Err(WispError::Config(_))));
    }

    #[test]
    fn from_file_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("display.toml");
        std::fs::write(&path, "frame_interval_ms = 250\nmonochrome = true\n")
            .expect("write config");

        let config = DisplayConfig::from_file(&path).expect("load config");
        assert_eq!(config.frame_interval(), Duration::from_millis(250));
        assert!(config.monochrome);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DisplayConfig::from_file(std::path::Path::new("/nonexistent/wisp.toml"));
        assert!(matches!(err, Err(WispError::Io(_))));
    }
}
