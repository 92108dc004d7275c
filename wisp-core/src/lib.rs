//! # Wisp Core Library
//!
//! Display-agnostic procedural animation for a small pixel mascot — a
//! pulsing cross-shaped body with eight radiating tendrils, rendered on
//! an abstract 32×32 cell grid.
//!
//! Everything here is a pure function of two inputs:
//!
//! - **time** — seconds of elapsed animation, accumulated by the caller
//! - **mood** — one of five discrete [`Mood`]s, each a fixed bundle of
//!   motion coefficients
//!
//! An [`Animator`] owns those two values and, on demand, produces the
//! complete ordered list of colored cells for the current instant. The
//! same math evaluated at the fixed [`rest::REST_TIME`] yields the rest
//! pose used by slow-refresh displays that cannot animate.
//!
//! ## Performance Contract
//!
//! All operations are designed for real-time use on small boards:
//! - Pulse evaluation: < 50ns
//! - Full animated frame: < 50μs
//! - Rest pose: < 50μs
//!
//! No I/O, no clocks, no randomness: feeding the same (time, mood) pair
//! in always yields the same cells out.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod animator;
pub mod body;
pub mod error;
pub mod mood;
pub mod palette;
pub mod pulse;
pub mod rest;
pub mod tendril;
pub mod types;

pub use animator::Animator;
pub use error::WispError;
pub use mood::{Mood, MoodParams};
pub use types::*;
