use vivagrade::{GradingError, InterviewMetrics, SessionCategory, SessionStatus};

fn metrics(elapsed: f64, expected: f64) -> InterviewMetrics {
    InterviewMetrics::builder()
        .elapsed_seconds(elapsed)
        .expected_seconds(expected)
        .transcript_char_count(500_usize)
        .transcript_word_count(100_usize)
        .candidate_turn_count(5_usize)
        .session_category(SessionCategory::General)
        .build()
}

#[test]
fn zero_expected_duration_is_rejected() {
    let err = vivagrade::grade(&metrics(60.0, 0.0), None).expect_err("reject zero denominator");

    assert_eq!(err, GradingError::ExpectedDurationNotPositive { expected_seconds: 0.0 });
}

#[test]
fn non_finite_expected_duration_is_rejected() {
    let err = vivagrade::grade(&metrics(60.0, f64::NAN), None).expect_err("reject NaN denominator");

    assert!(matches!(err, GradingError::ExpectedDurationNotPositive { .. }));
}

#[test]
fn negative_elapsed_duration_is_rejected() {
    let err = vivagrade::grade(&metrics(-1.0, 600.0), None).expect_err("reject negative elapsed");

    assert_eq!(err, GradingError::InvalidElapsed { elapsed_seconds: -1.0 });
}

#[test]
fn out_of_range_external_score_is_rejected() {
    let m = metrics(300.0, 600.0);

    for bad in [-0.1, 10.5, f64::NAN, f64::INFINITY] {
        let err = vivagrade::grade(&m, Some(bad)).expect_err("reject out-of-range quality score");
        assert!(matches!(err, GradingError::QualityScoreOutOfRange { .. }));
    }
}

#[test]
fn boundary_external_scores_are_accepted() {
    let m = metrics(300.0, 600.0);

    vivagrade::grade(&m, Some(0.0)).expect("accept quality score of 0");
    vivagrade::grade(&m, Some(10.0)).expect("accept quality score of 10");
}

#[test]
fn degraded_inputs_still_produce_a_result() {
    // Empty transcript, zero elapsed time: valid, handled by the fallback
    // classifier rather than rejected.
    let empty = InterviewMetrics::builder()
        .elapsed_seconds(0.0)
        .expected_seconds(600.0)
        .transcript_char_count(0_usize)
        .transcript_word_count(0_usize)
        .candidate_turn_count(0_usize)
        .build();

    let result = vivagrade::grade(&empty, None).expect("grade degraded session");

    assert_eq!(result.status, SessionStatus::InsufficientData);
    assert_eq!(result.score, 0);
    assert!(!result.feedback.is_empty());
}

#[test]
fn errors_render_readable_messages() {
    let err = GradingError::QualityScoreOutOfRange { score: 12.0 };

    assert_eq!(err.to_string(), "external quality score must be within [0, 10], got 12");
}
