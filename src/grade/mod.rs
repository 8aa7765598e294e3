#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Stage orchestration for grading a session.
//!
//! Control flows strictly: technical-issue classifier, then the completion
//! scorer, then (only for degenerate telemetry) the insufficient-data
//! fallback, then the result generator. Each grading call is a pure function
//! of its inputs.

/// Guard-stage classifiers and the machine-readable reason tags
pub mod classify;
/// Fixed feedback templates and strengths/improvements assembly
pub mod feedback;
/// The graded outcome types and their display
pub mod results;
/// The completion scorer
pub mod score;

use self::{
    classify::{ReasonTag, classify_insufficient_data, classify_technical_issue},
    results::{GradingResult, Recommendation, SessionStatus},
    score::score_completion,
};
use crate::{constants, error::GradingError, metrics::InterviewMetrics};

/// Grades one interview session.
///
/// The single entry point of the engine: validates the caller contract,
/// short-circuits on technical issues or insufficient data, and otherwise
/// blends the completion signals into a scored, classified result.
///
/// `external_quality_score` is an optional 0–10 semantic assessment from an
/// upstream evaluator; `None` means "not yet available", not zero.
pub fn grade(
    metrics: &InterviewMetrics,
    external_quality_score: Option<f64>,
) -> Result<GradingResult, GradingError> {
    metrics.validate()?;
    if let Some(score) = external_quality_score
        && (!score.is_finite() || !(0.0..=10.0).contains(&score))
    {
        return Err(GradingError::QualityScoreOutOfRange { score });
    }

    if let Some(reason) = classify_technical_issue(metrics) {
        tracing::warn!(%reason, "session classified as a technical issue");
        return Ok(failure_result(SessionStatus::TechnicalIssue, reason));
    }

    let breakdown = score_completion(metrics, external_quality_score);

    if let Some(reason) = classify_insufficient_data(metrics) {
        tracing::warn!(%reason, "session classified as insufficient data");
        return Ok(failure_result(SessionStatus::InsufficientData, reason));
    }

    let result = build_result(metrics, breakdown.final_score, breakdown.duration_completion);
    tracing::info!(
        score = result.score,
        status = %result.status,
        recommendation = %result.recommendation,
        "graded session"
    );
    Ok(result)
}

/// Builds the fixed zero-score outcome for a session that could not be
/// graded on merit.
fn failure_result(status: SessionStatus, reason: ReasonTag) -> GradingResult {
    GradingResult {
        score: 0,
        status,
        recommendation: Recommendation::Retry,
        feedback: feedback::failure_feedback(&reason),
        strengths: Vec::new(),
        improvements: feedback::failure_improvements(&reason),
        reason_tag: Some(reason),
    }
}

/// The result generator: turns the computed score into the final structured
/// outcome for a session that passed both guard classifiers.
fn build_result(metrics: &InterviewMetrics, score: u8, duration_ratio: f64) -> GradingResult {
    let strengths = feedback::assemble_strengths(metrics, score, duration_ratio);
    let improvements = feedback::assemble_improvements(metrics, score, duration_ratio);

    if duration_ratio < constants::PARTIAL_DURATION_RATIO {
        let percent = (duration_ratio * 100.0).round() as u8;
        let recommendation = if score >= constants::MAYBE_MIN_SCORE {
            Recommendation::Maybe
        } else {
            Recommendation::Retry
        };
        GradingResult {
            score,
            status: SessionStatus::Partial,
            recommendation,
            feedback: feedback::partial_feedback(score),
            strengths,
            improvements,
            reason_tag: Some(ReasonTag::PartialCompletion { percent }),
        }
    } else {
        let recommendation = if score >= constants::STRONG_HIRE_MIN_SCORE {
            Recommendation::StrongHire
        } else if score >= constants::HIRE_MIN_SCORE {
            Recommendation::Hire
        } else if score >= constants::MAYBE_MIN_SCORE {
            Recommendation::Maybe
        } else {
            Recommendation::NoHire
        };
        GradingResult {
            score,
            status: SessionStatus::Completed,
            recommendation,
            feedback: feedback::completed_feedback(score),
            strengths,
            improvements,
            reason_tag: None,
        }
    }
}
