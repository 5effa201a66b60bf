//! Marker sets used by the tutoring tasks.

use super::{MarkerExtractor, MarkerField};

/// Replies shorter than this (in characters) with no markers at all are
/// treated as a plain secondary-field answer.
pub const SHORT_REPLY_MAX_CHARS: usize = 150;

pub const CORRECTED_TEXT_MARKER: &str = "Corrected Text:";
pub const FEEDBACK_MARKER: &str = "Feedback:";
pub const TRANSLATION_MARKER: &str = "Translation:";
pub const EXPLANATION_MARKER: &str = "Explanation:";

/// `Corrected Text:` / `Feedback:`.
pub fn correction_extractor() -> MarkerExtractor {
    MarkerExtractor::new(vec![
        MarkerField::new(
            "corrected_text",
            CORRECTED_TEXT_MARKER,
            "Could not parse correction.",
        ),
        MarkerField::new("feedback", FEEDBACK_MARKER, "Could not parse feedback."),
    ])
    .with_short_reply_fallback("corrected_text", "feedback", SHORT_REPLY_MAX_CHARS)
}

/// `Translation:` / `Explanation:`.
pub fn translation_extractor() -> MarkerExtractor {
    MarkerExtractor::new(vec![
        MarkerField::new(
            "translation",
            TRANSLATION_MARKER,
            "Could not parse translation.",
        ),
        MarkerField::new(
            "explanation",
            EXPLANATION_MARKER,
            "Could not parse explanation.",
        ),
    ])
    .with_short_reply_fallback("translation", "explanation", SHORT_REPLY_MAX_CHARS)
}
