//! # vivagrade
//!
//! A grading engine that converts raw interview-session telemetry (elapsed
//! time, transcript size, candidate turn count, and an optional externally
//! computed quality score) into a final graded outcome: a 0–100 score, an
//! outcome classification, human-readable feedback, and a hiring-style
//! recommendation.
//!
//! The engine is a pure, synchronous computation with no I/O and no shared
//! state; it is safe to call concurrently from any number of callers.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// A module defining the tunable thresholds and weights used throughout
pub mod constants;
/// For the error taxonomy of the engine
pub mod error;
/// For all things related to grading a session
pub mod grade;
/// For the session telemetry consumed by the engine
pub mod metrics;

pub use error::GradingError;
pub use grade::{
    classify::ReasonTag,
    grade,
    results::{GradingResult, Recommendation, SessionStatus},
    score::ScoreBreakdown,
};
pub use metrics::{InterviewMetrics, SessionCategory};
