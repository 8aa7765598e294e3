#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Fixed feedback templates and the strengths/improvements assembly rules.

use itertools::Itertools;

use crate::{constants, grade::classify::ReasonTag, metrics::InterviewMetrics};

/// Fallback improvement item when no assembly rule fired.
const IMPROVEMENTS_FALLBACK: &str = "Continue practicing and learning";

/// Fallback strength item when no assembly rule fired.
const STRENGTHS_FALLBACK: &str = "Courage to participate in interviews";

/// Returns the fixed feedback paragraph for a session that could not be
/// graded on merit.
pub(crate) fn failure_feedback(reason: &ReasonTag) -> String {
    match reason {
        ReasonTag::ConnectionFailed => "The interview ended almost immediately with no recorded \
                                        exchange, which points to a connection failure rather \
                                        than anything you did. No score was assigned; please \
                                        check your setup and try again."
            .to_string(),
        ReasonTag::MicrophoneIssue => "Time passed during the session but no candidate input was \
                                       ever registered, which usually means a microphone or \
                                       input-device problem. The session was not graded on merit."
            .to_string(),
        ReasonTag::EarlyDisconnection => "You joined and began participating, but the session was \
                                          cut off within seconds of starting. This looks like an \
                                          early disconnection, so no fair assessment was possible."
            .to_string(),
        ReasonTag::DurationTooShort => "The session was far too short to evaluate; almost no time \
                                        elapsed before it ended, so no score could be assigned."
            .to_string(),
        ReasonTag::InsufficientContent => "The transcript contains too little content to judge \
                                           fairly. A complete session with fuller answers is \
                                           needed before any assessment."
            .to_string(),
        ReasonTag::InsufficientParticipation => "No candidate responses were recorded during the \
                                                 session, so there is nothing to assess. Please \
                                                 retry and respond to the questions asked."
            .to_string(),
        ReasonTag::PartialCompletion { percent } => format!(
            "The session ended after {percent}% of its expected duration, leaving too little \
             material for an assessment."
        ),
    }
}

/// Returns the fixed improvement items for a session that could not be
/// graded on merit.
pub(crate) fn failure_improvements(reason: &ReasonTag) -> Vec<String> {
    let items: &[&str] = match reason {
        ReasonTag::ConnectionFailed => &[
            "Verify your internet connection is stable before starting",
            "Rejoin from a wired or less congested network if possible",
        ],
        ReasonTag::MicrophoneIssue => &[
            "Confirm the correct microphone is selected and unmuted",
            "Run an audio check before rejoining the interview",
        ],
        ReasonTag::EarlyDisconnection => &[
            "Retry the interview when your connection is stable",
            "Close bandwidth-heavy applications before the next attempt",
        ],
        ReasonTag::DurationTooShort => &[
            "Set aside the full scheduled time before starting",
            "Retry the interview when you can complete it end to end",
        ],
        ReasonTag::InsufficientContent => &[
            "Answer each question in complete sentences",
            "Retry the interview and aim to address every question",
        ],
        ReasonTag::InsufficientParticipation | ReasonTag::PartialCompletion { .. } => &[
            "Respond to every question, even briefly",
            "Retry the interview and stay engaged throughout",
        ],
    };
    items.iter().map(|s| s.to_string()).collect()
}

/// Returns the score-banded feedback paragraph for a partially completed
/// session.
pub(crate) fn partial_feedback(score: u8) -> String {
    if score >= 70 {
        "The interview ended before its expected duration, but the portion you completed was \
         strong: substantive answers and steady engagement. A full session would likely have \
         scored well."
    } else if score >= 50 {
        "The interview ended before its expected duration. The portion you completed showed \
         reasonable effort, though there was not enough material for a confident assessment."
    } else {
        "The interview ended well before its expected duration, and the completed portion was too \
         thin to demonstrate your abilities. Completing a full session would give a much clearer \
         picture."
    }
    .to_string()
}

/// Returns the score-banded feedback paragraph for a fully completed
/// session.
pub(crate) fn completed_feedback(score: u8) -> String {
    if score >= 90 {
        "Outstanding interview. You engaged for the full expected duration, gave substantive \
         answers throughout, and demonstrated a strong command of the material."
    } else if score >= 80 {
        "A strong interview. You completed the full session with consistently solid answers; a \
         little more depth in places would make it exceptional."
    } else if score >= 70 {
        "A good interview. You completed the session and engaged well, with room to give fuller, \
         more detailed answers."
    } else if score >= 50 {
        "A fair interview. You completed the session, but the answers were often brief and left \
         significant ground uncovered."
    } else {
        "The interview was completed, but the responses were too sparse to demonstrate your \
         abilities. More thorough answers are needed to support an assessment."
    }
    .to_string()
}

/// Assembles the improvement items from independent rule checks.
///
/// Rules are checked in a fixed order, duplicates are removed, and the list
/// is never empty.
pub(crate) fn assemble_improvements(
    metrics: &InterviewMetrics,
    score: u8,
    duration_ratio: f64,
) -> Vec<String> {
    let mut items: Vec<&str> = Vec::new();

    if score < constants::MAYBE_MIN_SCORE {
        items.push("Give fuller answers that walk through your reasoning step by step");
        items.push("Review the fundamentals of the topics covered before your next interview");
    }
    if duration_ratio < constants::PARTIAL_DURATION_RATIO {
        items.push("Complete the full scheduled interview duration");
    }
    if metrics.candidate_turn_count < 5 {
        items.push("Engage more actively by responding to every question");
    }
    if score < constants::HIRE_MIN_SCORE {
        items.push("Support your answers with concrete examples from your own experience");
        items.push("Structure answers with a clear beginning, middle, and end");
    }

    let items: Vec<String> = items.into_iter().unique().map(|s| s.to_string()).collect();
    if items.is_empty() {
        vec![IMPROVEMENTS_FALLBACK.to_string()]
    } else {
        items
    }
}

/// Assembles the strength items from independent rule checks.
///
/// Same shape as [`assemble_improvements`]: fixed rule order, no duplicates,
/// guaranteed non-empty.
pub(crate) fn assemble_strengths(
    metrics: &InterviewMetrics,
    score: u8,
    duration_ratio: f64,
) -> Vec<String> {
    let mut items: Vec<&str> = Vec::new();

    if score >= 70 {
        items.push("Clear and substantive communication");
        items.push("Consistent engagement throughout the session");
    }
    if metrics.candidate_turn_count >= 3 {
        items.push("Active participation across multiple exchanges");
    }
    if duration_ratio >= 0.6 {
        items.push("Commitment to seeing the session through");
    }
    if score >= 50 {
        items.push("A solid baseline of performance to build on");
    }

    let items: Vec<String> = items.into_iter().unique().map(|s| s.to_string()).collect();
    if items.is_empty() {
        vec![STRENGTHS_FALLBACK.to_string()]
    } else {
        items
    }
}
