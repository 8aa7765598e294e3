#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Error taxonomy of the grading engine.
//!
//! The engine has no recoverable runtime errors: it either rejects the call
//! for invalid input or returns one complete [`crate::GradingResult`].
//! Degraded-but-valid inputs (empty transcript, zero elapsed time, missing
//! external score) are not errors; the classifiers and the quality floor
//! handle them.

use thiserror::Error;

/// Reasons the engine rejects a grading call outright.
///
/// Each variant is a caller contract violation. The engine fails fast rather
/// than silently clamping, since a bad denominator would otherwise produce a
/// misleading score.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradingError {
    /// The configured session duration must be a positive, finite number of
    /// seconds; it is used as a denominator throughout the scorer.
    #[error("expected session duration must be positive and finite, got {expected_seconds}")]
    ExpectedDurationNotPositive {
        /// The offending configured duration.
        expected_seconds: f64,
    },

    /// The elapsed wall-clock duration must be a non-negative, finite number
    /// of seconds.
    #[error("elapsed session duration must be non-negative and finite, got {elapsed_seconds}")]
    InvalidElapsed {
        /// The offending elapsed duration.
        elapsed_seconds: f64,
    },

    /// The external semantic quality score, when supplied, must lie in
    /// `[0, 10]`.
    #[error("external quality score must be within [0, 10], got {score}")]
    QualityScoreOutOfRange {
        /// The offending external score.
        score: f64,
    },
}
