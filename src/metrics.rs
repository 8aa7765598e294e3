#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Session telemetry consumed by the grading engine.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{constants, error::GradingError};

/// The domain of an interview session.
///
/// Used only to look up the expected speaking pace; an unrecognized category
/// is represented by the explicit [`SessionCategory::General`] fallback
/// rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionCategory {
    /// Coding and technology-focused sessions.
    Technical,
    /// Communication and collaboration-focused sessions.
    SoftSkills,
    /// Past-experience and situational sessions.
    Behavioral,
    /// Architecture and whiteboard-design sessions.
    SystemDesign,
    /// Any session that fits none of the above.
    #[default]
    General,
}

impl SessionCategory {
    /// Returns the number of words per minute a fully engaged candidate is
    /// expected to produce in this kind of session.
    pub fn words_per_minute(self) -> f64 {
        match self {
            SessionCategory::Technical => constants::WPM_TECHNICAL,
            SessionCategory::SoftSkills => constants::WPM_SOFT_SKILLS,
            SessionCategory::Behavioral => constants::WPM_BEHAVIORAL,
            SessionCategory::SystemDesign => constants::WPM_SYSTEM_DESIGN,
            SessionCategory::General => constants::WPM_DEFAULT,
        }
    }
}

impl Display for SessionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionCategory::Technical => "technical",
            SessionCategory::SoftSkills => "soft skills",
            SessionCategory::Behavioral => "behavioral",
            SessionCategory::SystemDesign => "system design",
            SessionCategory::General => "general",
        };
        write!(f, "{name}")
    }
}

/// Telemetry of one graded interview session, assembled by the caller.
///
/// Immutable once constructed; the engine never mutates it and reads
/// `expected_seconds` only as a denominator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
#[builder(doc)]
#[serde(rename_all = "camelCase")]
pub struct InterviewMetrics {
    /// * `elapsed_seconds`: wall-clock duration of the session
    pub elapsed_seconds:       f64,
    /// * `expected_seconds`: the duration the session was configured for
    pub expected_seconds:      f64,
    /// * `transcript_text`: full session transcript; may be empty
    #[builder(default)]
    pub transcript_text:       String,
    /// * `transcript_char_count`: non-whitespace characters in the transcript
    pub transcript_char_count: usize,
    /// * `transcript_word_count`: whitespace-separated words in the
    ///   transcript
    pub transcript_word_count: usize,
    /// * `candidate_turn_count`: distinct utterances attributed to the
    ///   candidate
    pub candidate_turn_count:  usize,
    /// * `session_category`: domain of the session, for the expected
    ///   speaking-pace lookup
    #[builder(default)]
    pub session_category:      SessionCategory,
    /// * `skill_level`: candidate skill level; carried through but not used
    ///   in scoring math
    #[builder(default)]
    pub skill_level:           String,
}

impl InterviewMetrics {
    /// Builds metrics from a raw transcript, deriving the word and character
    /// counts so that all callers agree on their definition: words are
    /// whitespace-separated tokens, characters exclude whitespace.
    pub fn from_transcript(
        elapsed_seconds: f64,
        expected_seconds: f64,
        transcript_text: impl Into<String>,
        candidate_turn_count: usize,
        session_category: SessionCategory,
    ) -> Self {
        let transcript_text = transcript_text.into();
        let transcript_word_count = transcript_text.split_whitespace().count();
        let transcript_char_count = transcript_text.chars().filter(|c| !c.is_whitespace()).count();

        Self {
            elapsed_seconds,
            expected_seconds,
            transcript_text,
            transcript_char_count,
            transcript_word_count,
            candidate_turn_count,
            session_category,
            skill_level: String::new(),
        }
    }

    /// Checks the caller contract on the numeric fields, failing fast on a
    /// bad denominator or a nonsensical elapsed duration.
    pub fn validate(&self) -> Result<(), GradingError> {
        if !self.expected_seconds.is_finite() || self.expected_seconds <= 0.0 {
            return Err(GradingError::ExpectedDurationNotPositive {
                expected_seconds: self.expected_seconds,
            });
        }
        if !self.elapsed_seconds.is_finite() || self.elapsed_seconds < 0.0 {
            return Err(GradingError::InvalidElapsed {
                elapsed_seconds: self.elapsed_seconds,
            });
        }
        Ok(())
    }
}
