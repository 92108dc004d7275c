//! Error types for the Wisp core library.

use thiserror::Error;

/// Top-level error type for all Wisp operations.
#[derive(Error, Debug)]
pub enum WispError {
    /// The caller advanced the animation clock by an invalid delta.
    ///
    /// Time only moves forward: a negative or non-finite `dt` is a
    /// programming error in the driving loop, not a runtime condition
    /// to recover from.
    #[error("invalid time step: {dt} (must be finite and non-negative)")]
    InvalidTimeStep {
        /// The rejected delta, in seconds.
        dt: f64,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, WispError>;
