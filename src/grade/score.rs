#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The completion scorer: a deterministic arithmetic pipeline that blends
//! weak completion signals (time, content, participation, optional external
//! quality) into one 0–100 score.
//!
//! This stage never classifies a session; it only produces the numeric score
//! consumed by the fallback classifier and the result generator.

use serde::Serialize;

use crate::{constants, metrics::InterviewMetrics};

/// Intermediate ratios and scores produced by the completion scorer, exposed
/// read-only for observability and tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Fraction of the expected duration that actually elapsed, capped at 1.
    pub duration_completion:      f64,
    /// Word-completion ratio plus the average-word-length bonus, capped at 1.
    pub content_completion:       f64,
    /// Fraction of the expected candidate turns observed, capped at 1.
    pub participation_completion: f64,
    /// External quality score rescaled to 0–100, when one was supplied.
    pub normalized_external:      Option<f64>,
    /// Weighted blend after the completion multiplier, before the quality
    /// floor.
    pub weighted_score:           u8,
    /// Minimum score guaranteed by the participation-quality heuristics.
    pub quality_floor:            u8,
    /// The score the engine reports: the larger of the weighted score and
    /// the quality floor.
    pub final_score:              u8,
}

/// Returns the multiplier applied to the weighted blend for a given overall
/// completion, per the bands in [`constants::MULTIPLIER_BANDS`].
pub fn completion_multiplier(overall_completion: f64) -> f64 {
    for (minimum, multiplier) in constants::MULTIPLIER_BANDS {
        if overall_completion >= minimum {
            return multiplier;
        }
    }
    constants::MULTIPLIER_FLOOR
}

/// Rounds half away from zero and clamps into the reportable score range.
fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Average word length of the transcript, guarding the empty-transcript
/// divide.
fn avg_word_length(metrics: &InterviewMetrics) -> f64 {
    metrics.transcript_char_count as f64 / metrics.transcript_word_count.max(1) as f64
}

/// Participation quality in `[0, 1]`: a weighted blend of how the session's
/// duration, speaking pace, back-and-forth rate, and vocabulary compare to
/// baseline expectations, each signal individually capped at 1.
///
/// Only meaningful when some time elapsed and some words were spoken; the
/// caller guards that.
fn participation_quality(metrics: &InterviewMetrics) -> f64 {
    let minutes = metrics.elapsed_seconds / 60.0;

    let duration_ratio = (metrics.elapsed_seconds / constants::FLOOR_DURATION_TARGET).min(1.0);
    let pace_ratio = ((metrics.transcript_word_count as f64 / minutes) / constants::FLOOR_WPM_TARGET)
        .min(1.0);
    let turns_ratio = ((metrics.candidate_turn_count as f64 / minutes)
        / constants::FLOOR_TURNS_PER_MINUTE_TARGET)
        .min(1.0);
    let word_length_ratio = (avg_word_length(metrics) / constants::AVG_WORD_LENGTH_TARGET).min(1.0);

    duration_ratio * constants::FLOOR_DURATION_WEIGHT
        + pace_ratio * constants::FLOOR_WPM_WEIGHT
        + turns_ratio * constants::FLOOR_TURNS_WEIGHT
        + word_length_ratio * constants::FLOOR_WORD_LENGTH_WEIGHT
}

/// Computes the continuous 0–100 completion score for a session.
///
/// The pipeline, in order: per-signal completion ratios, the weighted blend
/// (with the external-quality weight redistributed proportionally when no
/// external score is present, so the full 0–100 ceiling stays reachable),
/// the overall-completion multiplier, and finally the participation-quality
/// floor.
pub fn score_completion(
    metrics: &InterviewMetrics,
    external_quality_score: Option<f64>,
) -> ScoreBreakdown {
    let duration_completion = (metrics.elapsed_seconds / metrics.expected_seconds).min(1.0);

    let expected_words =
        (metrics.expected_seconds / 60.0) * metrics.session_category.words_per_minute();
    let word_completion = (metrics.transcript_word_count as f64 / expected_words).min(1.0);
    let quality_bonus = (avg_word_length(metrics) / constants::AVG_WORD_LENGTH_TARGET).min(1.0)
        * constants::QUALITY_BONUS_WEIGHT;
    let content_completion = (word_completion + quality_bonus).min(1.0);

    let expected_turns = (metrics.expected_seconds / constants::SECONDS_PER_TURN)
        .round()
        .max(constants::MIN_EXPECTED_TURNS);
    let participation_completion =
        (metrics.candidate_turn_count as f64 / expected_turns).min(1.0);

    let ratio_blend = duration_completion * constants::DURATION_WEIGHT
        + content_completion * constants::CONTENT_WEIGHT
        + participation_completion * constants::PARTICIPATION_WEIGHT;

    let (weighted_base, normalized_external) = match external_quality_score {
        Some(quality) => {
            let normalized = (quality * 10.0).min(100.0);
            (100.0 * ratio_blend + normalized * constants::EXTERNAL_WEIGHT, Some(normalized))
        }
        None => {
            // Renormalize the remaining weights to sum to 1 so the ceiling
            // stays reachable without an external score.
            let remaining_weight = constants::DURATION_WEIGHT
                + constants::CONTENT_WEIGHT
                + constants::PARTICIPATION_WEIGHT;
            (100.0 * ratio_blend / remaining_weight, None)
        }
    };

    let overall_completion = (duration_completion + content_completion) / 2.0;
    let multiplier = completion_multiplier(overall_completion);
    let weighted_score = round_score(weighted_base * multiplier);

    let quality_floor =
        if metrics.elapsed_seconds > 0.0 && metrics.transcript_word_count > 0 {
            round_score(participation_quality(metrics) * constants::FLOOR_MAX_POINTS)
        } else {
            0
        };

    let final_score = weighted_score.max(quality_floor).min(100);

    tracing::debug!(
        duration_completion,
        content_completion,
        participation_completion,
        multiplier,
        weighted_score,
        quality_floor,
        final_score,
        "scored session completion"
    );

    ScoreBreakdown {
        duration_completion,
        content_completion,
        participation_completion,
        normalized_external,
        weighted_score,
        quality_floor,
        final_score,
    }
}
