use vivagrade::{
    InterviewMetrics, ReasonTag, Recommendation, SessionCategory, SessionStatus,
    grade::classify::classify_insufficient_data,
};

fn metrics(elapsed: f64, expected: f64, words: usize, chars: usize, turns: usize) -> InterviewMetrics {
    InterviewMetrics::builder()
        .elapsed_seconds(elapsed)
        .expected_seconds(expected)
        .transcript_char_count(chars)
        .transcript_word_count(words)
        .candidate_turn_count(turns)
        .session_category(SessionCategory::General)
        .build()
}

#[test]
fn degenerate_session_falls_back_to_insufficient_data() {
    let m = metrics(3.0, 600.0, 2, 9, 0);

    let result = vivagrade::grade(&m, None).expect("grade degenerate session");

    assert_eq!(result.status, SessionStatus::InsufficientData);
    assert_eq!(result.reason_tag, Some(ReasonTag::DurationTooShort));
    assert_eq!(result.reason_tag.unwrap().to_string(), "duration_too_short");
    assert_eq!(result.score, 0);
    assert_eq!(result.recommendation, Recommendation::Retry);
}

#[test]
fn empty_session_is_insufficient_data() {
    let m = metrics(0.0, 600.0, 0, 0, 0);

    let result = vivagrade::grade(&m, None).expect("grade empty session");

    assert_eq!(result.status, SessionStatus::InsufficientData);
    assert_eq!(result.reason_tag, Some(ReasonTag::DurationTooShort));
}

#[test]
fn fallback_requires_both_sparse_signals() {
    // Enough words to leave the fallback window: the technical-issue
    // classifier owns the session instead.
    let with_words = metrics(3.0, 600.0, 8, 30, 1);
    assert_eq!(classify_insufficient_data(&with_words), None);
    let result = vivagrade::grade(&with_words, None).expect("grade short but wordy session");
    assert_eq!(result.status, SessionStatus::TechnicalIssue);

    // Enough elapsed time to leave the fallback window.
    let with_time = metrics(5.0, 600.0, 2, 9, 0);
    assert_eq!(classify_insufficient_data(&with_time), None);
    let result = vivagrade::grade(&with_time, None).expect("grade sparse but longer session");
    assert_eq!(result.status, SessionStatus::TechnicalIssue);
    assert_eq!(result.reason_tag, Some(ReasonTag::ConnectionFailed));
}

#[test]
fn normal_low_scores_are_not_relabeled() {
    // A sparse but real session: low score, still graded on merit.
    let m = metrics(120.0, 600.0, 30, 120, 1);

    let result = vivagrade::grade(&m, None).expect("grade sparse session");

    assert_eq!(result.status, SessionStatus::Partial);
    assert!(result.score > 0);
}
