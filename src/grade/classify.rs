#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Guard-stage classifiers that decide whether a session can be graded on
//! merit at all.
//!
//! The technical-issue classifier runs first and distinguishes "the session
//! never functioned" from low effort; the insufficient-data classifier is a
//! narrow fallback for sessions that happened but were too sparse to judge
//! fairly.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{constants, metrics::InterviewMetrics};

/// Machine-readable cause attached to a non-`Completed` grading outcome.
///
/// Free text belongs in the feedback field; callers branch on this
/// enumeration exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonTag {
    /// The session barely began before ending with no real transcript.
    ConnectionFailed,
    /// Time passed but the candidate never registered a single turn.
    MicrophoneIssue,
    /// Real participation was recorded, but the session terminated almost
    /// immediately after starting.
    EarlyDisconnection,
    /// Almost no time elapsed before the session ended.
    DurationTooShort,
    /// The transcript holds too few words to judge.
    InsufficientContent,
    /// No candidate turns were recorded.
    InsufficientParticipation,
    /// The session ran for only part of its expected duration.
    PartialCompletion {
        /// Percentage of the expected duration that was completed.
        percent: u8,
    },
}

impl Display for ReasonTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReasonTag::ConnectionFailed => write!(f, "connection_failed"),
            ReasonTag::MicrophoneIssue => write!(f, "microphone_issue"),
            ReasonTag::EarlyDisconnection => write!(f, "early_disconnection"),
            ReasonTag::DurationTooShort => write!(f, "duration_too_short"),
            ReasonTag::InsufficientContent => write!(f, "insufficient_content"),
            ReasonTag::InsufficientParticipation => write!(f, "insufficient_participation"),
            ReasonTag::PartialCompletion { percent } => {
                write!(f, "completed {percent}% of expected duration")
            }
        }
    }
}

/// Detects signs that the session never really happened.
///
/// Applies three mutually exclusive, ordered checks; the first match wins.
/// A `Some` return short-circuits grading entirely: the scorer and the
/// result generator never run for such sessions.
pub fn classify_technical_issue(metrics: &InterviewMetrics) -> Option<ReasonTag> {
    // Sessions inside the sparse-data fallback window are left for the
    // insufficient-data classifier; with that little telemetry a connection
    // failure cannot be told apart from a session that never got going.
    let in_fallback_window = metrics.elapsed_seconds < constants::FALLBACK_MAX_ELAPSED
        && metrics.transcript_word_count < constants::FALLBACK_MAX_WORDS;

    if !in_fallback_window
        && metrics.elapsed_seconds < constants::CONNECTION_FAILED_MAX_ELAPSED
        && metrics.transcript_word_count < constants::CONNECTION_FAILED_MAX_WORDS
    {
        return Some(ReasonTag::ConnectionFailed);
    }

    // Time passed but the candidate never registered: an input-capture
    // failure, not low effort.
    if metrics.elapsed_seconds > constants::MIC_ISSUE_MIN_ELAPSED
        && metrics.candidate_turn_count == 0
    {
        return Some(ReasonTag::MicrophoneIssue);
    }

    if metrics.elapsed_seconds < constants::EARLY_DISCONNECT_MAX_ELAPSED
        && metrics.transcript_word_count > constants::EARLY_DISCONNECT_MIN_WORDS
        && metrics.candidate_turn_count > 0
    {
        return Some(ReasonTag::EarlyDisconnection);
    }

    None
}

/// Detects sessions too sparse to grade fairly.
///
/// Deliberately narrow: only sessions inside the fallback guard (under
/// [`constants::FALLBACK_MAX_ELAPSED`] seconds with fewer than
/// [`constants::FALLBACK_MAX_WORDS`] words) are considered, so normal low
/// scores are never relabeled as data problems. Checks run in order; the
/// first match wins.
pub fn classify_insufficient_data(metrics: &InterviewMetrics) -> Option<ReasonTag> {
    if metrics.elapsed_seconds >= constants::FALLBACK_MAX_ELAPSED
        || metrics.transcript_word_count >= constants::FALLBACK_MAX_WORDS
    {
        return None;
    }

    if metrics.elapsed_seconds < constants::SHORT_DURATION_CUTOFF {
        Some(ReasonTag::DurationTooShort)
    } else if metrics.transcript_word_count < constants::MIN_CONTENT_WORDS {
        Some(ReasonTag::InsufficientContent)
    } else if metrics.candidate_turn_count < constants::MIN_PARTICIPATION_TURNS {
        Some(ReasonTag::InsufficientParticipation)
    } else {
        None
    }
}
