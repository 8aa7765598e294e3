#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Thresholds and weights used by the classifiers and the completion scorer.
//!
//! All of these are empirically chosen tunables, not semantically meaningful
//! boundaries; they are collected here so that retuning never requires
//! touching the scoring pipeline itself.

/// A session shorter than this many seconds with almost no transcript is
/// treated as a connection failure.
pub const CONNECTION_FAILED_MAX_ELAPSED: f64 = 15.0;

/// Maximum transcript word count for the connection-failure check.
pub const CONNECTION_FAILED_MAX_WORDS: usize = 10;

/// Minimum elapsed seconds before a zero-turn session is attributed to a
/// microphone problem rather than a session that never started.
pub const MIC_ISSUE_MIN_ELAPSED: f64 = 10.0;

/// A session that ends before this many seconds, despite real participation,
/// is treated as an early disconnection.
pub const EARLY_DISCONNECT_MAX_ELAPSED: f64 = 20.0;

/// Minimum word count showing real participation for the early-disconnection
/// check (strictly greater than).
pub const EARLY_DISCONNECT_MIN_WORDS: usize = 5;

/// Elapsed-seconds bound of the insufficient-data fallback guard.
pub const FALLBACK_MAX_ELAPSED: f64 = 5.0;

/// Word-count bound of the insufficient-data fallback guard.
pub const FALLBACK_MAX_WORDS: usize = 5;

/// Sessions shorter than this many seconds are tagged `duration_too_short`.
pub const SHORT_DURATION_CUTOFF: f64 = 10.0;

/// Transcripts with fewer words than this are tagged `insufficient_content`.
pub const MIN_CONTENT_WORDS: usize = 20;

/// Sessions with fewer candidate turns than this are tagged
/// `insufficient_participation`.
pub const MIN_PARTICIPATION_TURNS: usize = 1;

/// Weight of the duration-completion ratio in the blended score.
pub const DURATION_WEIGHT: f64 = 0.3;

/// Weight of the content-completion ratio in the blended score.
pub const CONTENT_WEIGHT: f64 = 0.4;

/// Weight of the participation-completion ratio in the blended score.
pub const PARTICIPATION_WEIGHT: f64 = 0.2;

/// Weight of the normalized external quality score, when one is present.
pub const EXTERNAL_WEIGHT: f64 = 0.1;

/// Average word length (in characters) treated as full marks for the
/// content-quality bonus and the participation-quality floor.
pub const AVG_WORD_LENGTH_TARGET: f64 = 6.0;

/// Cap on the content-quality bonus added to the word-completion ratio.
pub const QUALITY_BONUS_WEIGHT: f64 = 0.2;

/// Seconds of session time expected to produce one candidate turn.
pub const SECONDS_PER_TURN: f64 = 30.0;

/// Minimum number of expected candidate turns regardless of duration.
pub const MIN_EXPECTED_TURNS: f64 = 2.0;

/// Completion-multiplier bands, as `(minimum overall completion, multiplier)`
/// pairs checked in order; the first band whose minimum is met wins.
pub const MULTIPLIER_BANDS: [(f64, f64); 4] = [(0.8, 1.0), (0.6, 0.9), (0.3, 0.8), (0.1, 0.6)];

/// Multiplier applied when overall completion falls below every band.
pub const MULTIPLIER_FLOOR: f64 = 0.5;

/// Session duration (seconds) treated as full marks for the floor's
/// duration signal.
pub const FLOOR_DURATION_TARGET: f64 = 300.0;

/// Words-per-minute rate treated as full marks for the floor's pace signal.
pub const FLOOR_WPM_TARGET: f64 = 50.0;

/// Turns-per-minute rate treated as full marks for the floor's
/// back-and-forth signal.
pub const FLOOR_TURNS_PER_MINUTE_TARGET: f64 = 2.0;

/// Weight of the duration signal in the participation-quality blend.
pub const FLOOR_DURATION_WEIGHT: f64 = 0.3;

/// Weight of the words-per-minute signal in the participation-quality blend.
pub const FLOOR_WPM_WEIGHT: f64 = 0.3;

/// Weight of the turns-per-minute signal in the participation-quality blend.
pub const FLOOR_TURNS_WEIGHT: f64 = 0.2;

/// Weight of the average-word-length signal in the participation-quality
/// blend.
pub const FLOOR_WORD_LENGTH_WEIGHT: f64 = 0.2;

/// Maximum score the participation-quality floor can guarantee.
pub const FLOOR_MAX_POINTS: f64 = 20.0;

/// Duration-completion ratio below which a session is graded as partial.
pub const PARTIAL_DURATION_RATIO: f64 = 0.8;

/// Minimum score for a `StrongHire` recommendation on a completed session.
pub const STRONG_HIRE_MIN_SCORE: u8 = 90;

/// Minimum score for a `Hire` recommendation on a completed session.
pub const HIRE_MIN_SCORE: u8 = 80;

/// Minimum score for a `Maybe` recommendation (completed or partial).
pub const MAYBE_MIN_SCORE: u8 = 60;

/// Words per minute expected of a technical session.
pub const WPM_TECHNICAL: f64 = 120.0;

/// Words per minute expected of a soft-skills session.
pub const WPM_SOFT_SKILLS: f64 = 100.0;

/// Words per minute expected of a behavioral session.
pub const WPM_BEHAVIORAL: f64 = 110.0;

/// Words per minute expected of a system-design session.
pub const WPM_SYSTEM_DESIGN: f64 = 130.0;

/// Words per minute assumed for any other session category.
pub const WPM_DEFAULT: f64 = 110.0;
