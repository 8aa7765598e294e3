use vivagrade::{
    InterviewMetrics, ReasonTag, Recommendation, SessionCategory, SessionStatus,
    grade::{classify::classify_technical_issue, score::score_completion},
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
fn connection_failure_short_circuits() {
    let m = metrics(5.0, 600.0, 3, 12, 0);

    let result = vivagrade::grade(&m, None).expect("grade connection-failure session");

    assert_eq!(result.status, SessionStatus::TechnicalIssue);
    assert_eq!(result.reason_tag, Some(ReasonTag::ConnectionFailed));
    assert_eq!(result.score, 0);
    assert_eq!(result.recommendation, Recommendation::Retry);
    assert!(!result.improvements.is_empty());
    assert!(result.strengths.is_empty());
}

#[test]
fn microphone_issue_detected_when_no_turns_registered() {
    let m = metrics(40.0, 600.0, 15, 70, 0);

    let result = vivagrade::grade(&m, None).expect("grade microphone-issue session");

    assert_eq!(result.status, SessionStatus::TechnicalIssue);
    assert_eq!(result.reason_tag, Some(ReasonTag::MicrophoneIssue));
    assert_eq!(result.reason_tag.unwrap().to_string(), "microphone_issue");
    assert_eq!(result.score, 0);
}

#[test]
fn early_disconnection_detected_after_real_participation() {
    let m = metrics(18.0, 600.0, 12, 60, 2);

    let result = vivagrade::grade(&m, None).expect("grade early-disconnection session");

    assert_eq!(result.status, SessionStatus::TechnicalIssue);
    assert_eq!(result.reason_tag, Some(ReasonTag::EarlyDisconnection));
    assert_eq!(result.recommendation, Recommendation::Retry);
}

#[test]
fn first_matching_check_wins() {
    // Matches both the connection-failure and microphone checks; the
    // connection-failure check is ordered first.
    let m = metrics(12.0, 600.0, 0, 0, 0);

    assert_eq!(classify_technical_issue(&m), Some(ReasonTag::ConnectionFailed));
}

#[test]
fn healthy_session_is_not_classified() {
    let m = metrics(300.0, 600.0, 500, 2500, 8);

    assert_eq!(classify_technical_issue(&m), None);
}

#[test]
fn scorer_output_is_never_consulted_for_technical_issues() {
    // A session the scorer would rate well, were it consulted.
    let m = metrics(40.0, 60.0, 100, 600, 0);

    let breakdown = score_completion(&m, None);
    assert!(breakdown.final_score > 0);

    let result = vivagrade::grade(&m, None).expect("grade despite scoreable telemetry");
    assert_eq!(result.status, SessionStatus::TechnicalIssue);
    assert_eq!(result.score, 0);
}
