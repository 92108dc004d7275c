//! # wisp-display — display-loop integration for Wisp
//!
//! This crate provides the integration layer between the
//! display-agnostic `wisp-core` animation engine and whatever is
//! actually showing the mascot: a memory framebuffer, an image file, a
//! TFT panel, an e-paper module.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────┐
//! │              Host display loop             │
//! │  ┌─────────────────────────────────────┐  │
//! │  │          wisp-display               │  │
//! │  │  ┌───────────┐  ┌────────────────┐  │  │
//! │  │  │ Activity  │  │ DisplayDriver  │  │  │
//! │  │  │  → Mood   │  │ blink, refresh │  │  │
//! │  │  └─────┬─────┘  └───────┬────────┘  │  │
//! │  │        │                │           │  │
//! │  │        ▼                ▼           │  │
//! │  │   ┌─────────────────────────┐       │  │
//! │  │   │       wisp-core         │       │  │
//! │  │   └─────────────────────────┘       │  │
//! │  │                │                    │  │
//! │  │                ▼                    │  │
//! │  │   ┌─────────────────────────┐       │  │
//! │  │   │   FrameSink (trait)     │       │  │
//! │  │   └─────────────────────────┘       │  │
//! │  └─────────────────────────────────────┘  │
//! └───────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `sink` — the `FrameSink` trait and the in-memory `FrameBuffer`
//! - `driver` — `DisplayDriver`: one animator, one sink, one cadence
//! - `activity` — maps an observed room-activity signal to a mood
//! - `blink` — per-mood randomized blink scheduling
//! - `refresh` — full/partial refresh cadence and frame-change skip
//! - `config` — TOML-loadable display configuration

pub mod activity;
pub mod blink;
pub mod config;
pub mod driver;
pub mod refresh;
pub mod sink;

pub use activity::{MoodPolicy, RoomActivity};
pub use config::DisplayConfig;
pub use driver::DisplayDriver;
pub use sink::{FrameBuffer, FrameSink};
