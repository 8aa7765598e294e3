#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The graded outcome types and their display.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

use super::classify::ReasonTag;

/// Outcome classification of a graded session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// The session ran for (at least most of) its expected duration.
    Completed,
    /// The session happened but ended early.
    Partial,
    /// The session never functioned; no merit grading took place.
    TechnicalIssue,
    /// The session happened but was too sparse to judge fairly.
    InsufficientData,
}

impl Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SessionStatus::Completed => "Completed",
            SessionStatus::Partial => "Partial",
            SessionStatus::TechnicalIssue => "Technical Issue",
            SessionStatus::InsufficientData => "Insufficient Data",
        };
        write!(f, "{name}")
    }
}

/// Hiring-style recommendation derived from the score and classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Exceptional performance; advance with confidence.
    StrongHire,
    /// Solid performance; advance.
    Hire,
    /// Mixed signals; gather more information.
    Maybe,
    /// Performance below the bar.
    NoHire,
    /// The session should be re-run before any judgement.
    Retry,
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Recommendation::StrongHire => "Strong Hire",
            Recommendation::Hire => "Hire",
            Recommendation::Maybe => "Maybe",
            Recommendation::NoHire => "No Hire",
            Recommendation::Retry => "Retry",
        };
        write!(f, "{name}")
    }
}

/// A struct to store the graded outcome of a session and display it.
#[derive(Tabled, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingResult {
    /// * `score`: final score in `[0, 100]`
    #[tabled(rename = "Score")]
    pub score:          u8,
    /// * `status`: outcome classification
    #[tabled(rename = "Status")]
    pub status:         SessionStatus,
    /// * `recommendation`: hiring-style recommendation
    #[tabled(rename = "Recommendation")]
    pub recommendation: Recommendation,
    /// * `feedback`: single human-readable paragraph
    #[tabled(rename = "Feedback")]
    pub feedback:       String,
    /// * `strengths`: what the candidate did well, in rule order
    #[tabled(skip)]
    pub strengths:      Vec<String>,
    /// * `improvements`: what to work on next, in rule order
    #[tabled(skip)]
    pub improvements:   Vec<String>,
    /// * `reason_tag`: machine-readable cause for any non-`Completed` status
    #[tabled(skip)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_tag:     Option<ReasonTag>,
}

impl GradingResult {
    /// Prints the result as a table on stderr.
    pub fn show(&self) {
        eprintln!(
            "{}",
            Table::new([self])
                .with(Panel::header("Interview grading result"))
                .with(Modify::new(Rows::new(1..)).with(Width::wrap(48).keep_words(true)))
                .with(
                    Modify::new(Rows::first())
                        .with(Alignment::center())
                        .with(Alignment::center_vertical()),
                )
                .with(Style::modern())
        );
    }
}
