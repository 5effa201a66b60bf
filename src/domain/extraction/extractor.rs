//! Reply extraction strategies.
//!
//! A reply is first classified (blocked, empty, or text). Only text goes
//! through a strategy. Strategies never fail: a missing marker leaves the
//! field at its declared default.

use std::fmt;

use super::{ExtractedField, ExtractedFields, FieldSource, RawReply};
use crate::domain::foundation::RelayError;

/// Outcome of running an extractor over a raw reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Blocked { reason: String },
    Empty,
    Fields(ExtractedFields),
}

impl Extraction {
    /// Converts the signal outcomes into the matching relay errors.
    pub fn into_result(self) -> Result<ExtractedFields, RelayError> {
        match self {
            Extraction::Blocked { reason } => Err(RelayError::blocked(reason)),
            Extraction::Empty => Err(RelayError::Empty),
            Extraction::Fields(fields) => Ok(fields),
        }
    }
}

/// Splits a reply body into named fields.
pub trait Extractor: Send + Sync + fmt::Debug {
    /// Field names this strategy produces, in declared order.
    fn field_names(&self) -> Vec<&str>;

    /// Parses a text body. Always yields every declared field.
    fn extract_fields(&self, body: &str) -> ExtractedFields;

    /// Classifies the reply, then parses text bodies.
    fn extract(&self, reply: &RawReply) -> Extraction {
        match reply {
            RawReply::Blocked { reason } => Extraction::Blocked {
                reason: reason.clone(),
            },
            RawReply::Empty => Extraction::Empty,
            RawReply::Text(body) if body.trim().is_empty() => Extraction::Empty,
            RawReply::Text(body) => Extraction::Fields(self.extract_fields(body)),
        }
    }
}

/// One marker-delimited field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerField {
    pub name: String,
    pub marker: String,
    pub default: String,
}

impl MarkerField {
    pub fn new(
        name: impl Into<String>,
        marker: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            marker: marker.into(),
            default: default.into(),
        }
    }
}

/// Moves a short reply with no markers into a secondary field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortReplyFallback {
    pub primary: String,
    pub secondary: String,
    /// Bodies with fewer characters than this qualify.
    pub max_chars: usize,
}

/// Field name used when a marker extractor is built with no fields.
pub const BODY_FIELD: &str = "body";

/// Case-sensitive substring markers, e.g. `Corrected Text:` / `Feedback:`.
///
/// With fewer than two fields there is nothing to split: the lone field (or
/// [`BODY_FIELD`] when none are configured) takes the whole body unchanged.
#[derive(Debug, Clone)]
pub struct MarkerExtractor {
    fields: Vec<MarkerField>,
    short_reply: Option<ShortReplyFallback>,
}

impl MarkerExtractor {
    pub fn new(fields: Vec<MarkerField>) -> Self {
        Self {
            fields,
            short_reply: None,
        }
    }

    pub fn with_short_reply_fallback(
        mut self,
        primary: impl Into<String>,
        secondary: impl Into<String>,
        max_chars: usize,
    ) -> Self {
        self.short_reply = Some(ShortReplyFallback {
            primary: primary.into(),
            secondary: secondary.into(),
            max_chars,
        });
        self
    }

    pub fn fields(&self) -> &[MarkerField] {
        &self.fields
    }

    /// End of the value that starts at `start`: the nearest occurrence of any
    /// other marker at or after `start`, or the end of the body.
    fn value_end(&self, body: &str, index: usize, start: usize) -> usize {
        let rest = &body[start..];
        self.fields
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .filter_map(|(_, field)| rest.find(field.marker.as_str()))
            .min()
            .map_or(body.len(), |offset| start + offset)
    }

    fn marker_found(&self, body: &str, name: &str) -> Option<bool> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| body.contains(f.marker.as_str()))
    }
}

impl Extractor for MarkerExtractor {
    fn field_names(&self) -> Vec<&str> {
        if self.fields.is_empty() {
            return vec![BODY_FIELD];
        }
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    fn extract_fields(&self, body: &str) -> ExtractedFields {
        match self.fields.as_slice() {
            [] => return WholeBodyExtractor::new(BODY_FIELD).extract_fields(body),
            [only] => {
                return WholeBodyExtractor::new(only.name.as_str()).extract_fields(body);
            }
            _ => {}
        }

        let values = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| match body.find(field.marker.as_str()) {
                Some(at) => {
                    let start = at + field.marker.len();
                    let end = self.value_end(body, index, start);
                    ExtractedField {
                        name: field.name.clone(),
                        value: body[start..end].trim().to_string(),
                        source: FieldSource::Marker,
                    }
                }
                None => ExtractedField {
                    name: field.name.clone(),
                    value: field.default.clone(),
                    source: FieldSource::Default,
                },
            })
            .collect();

        let mut extracted = ExtractedFields::new(values, body);

        if let Some(fallback) = &self.short_reply {
            let primary_found = self.marker_found(body, &fallback.primary);
            let secondary_found = self.marker_found(body, &fallback.secondary);
            if primary_found == Some(false)
                && secondary_found == Some(false)
                && body.chars().count() < fallback.max_chars
            {
                extracted.set(
                    &fallback.secondary,
                    body.trim().to_string(),
                    FieldSource::ShortReply,
                );
            }
        }

        extracted
    }
}

/// The whole body is the single field's value.
#[derive(Debug, Clone)]
pub struct WholeBodyExtractor {
    field: String,
}

impl WholeBodyExtractor {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl Extractor for WholeBodyExtractor {
    fn field_names(&self) -> Vec<&str> {
        vec![self.field.as_str()]
    }

    fn extract_fields(&self, body: &str) -> ExtractedFields {
        ExtractedFields::new(
            vec![ExtractedField {
                name: self.field.clone(),
                value: body.to_string(),
                source: FieldSource::WholeBody,
            }],
            body,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction::marker_sets::{correction_extractor, translation_extractor};

    fn fields_of(extractor: &dyn Extractor, body: &str) -> ExtractedFields {
        match extractor.extract(&RawReply::from_text(body)) {
            Extraction::Fields(fields) => fields,
            other => panic!("Expected fields, got {:?}", other),
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Marker strategy
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn splits_both_markers_in_order() {
        let fields = fields_of(
            &correction_extractor(),
            "Corrected Text:\nFOO\n\nFeedback:\nBAR",
        );
        assert_eq!(fields.get("corrected_text"), Some("FOO"));
        assert_eq!(fields.get("feedback"), Some("BAR"));
        assert!(!fields.has_defaults());
    }

    #[test]
    fn reversed_markers_still_split() {
        let fields = fields_of(
            &correction_extractor(),
            "Feedback: fixed tense\nCorrected Text: I went home.",
        );
        assert_eq!(fields.get("corrected_text"), Some("I went home."));
        assert_eq!(fields.get("feedback"), Some("fixed tense"));
    }

    #[test]
    fn missing_marker_uses_default() {
        let body = format!("Corrected Text: {}", "x".repeat(200));
        let fields = fields_of(&correction_extractor(), &body);
        assert_eq!(fields.get("feedback"), Some("Could not parse feedback."));
        assert_eq!(
            fields.field("feedback").map(|f| f.source),
            Some(FieldSource::Default)
        );
    }

    #[test]
    fn markers_are_case_sensitive() {
        let body = format!("corrected text: nope {}", "y".repeat(200));
        let fields = fields_of(&correction_extractor(), &body);
        assert_eq!(
            fields.get("corrected_text"),
            Some("Could not parse correction.")
        );
    }

    #[test]
    fn single_field_takes_whole_body_without_marker_search() {
        let extractor = MarkerExtractor::new(vec![MarkerField::new(
            "summary",
            "Summary:",
            "Could not parse summary.",
        )]);
        let fields = fields_of(&extractor, "The cat sat on the mat.");

        assert_eq!(fields.get("summary"), Some("The cat sat on the mat."));
        assert_eq!(
            fields.field("summary").map(|f| f.source),
            Some(FieldSource::WholeBody)
        );
    }

    #[test]
    fn single_field_ignores_its_own_marker() {
        let extractor = MarkerExtractor::new(vec![MarkerField::new("summary", "Summary:", "-")]);
        let body = "Summary: short
";
        assert_eq!(fields_of(&extractor, body).get("summary"), Some(body));
    }

    #[test]
    fn no_fields_returns_body_as_lone_field() {
        let extractor = MarkerExtractor::new(Vec::new());
        let fields = fields_of(&extractor, "plain body");

        assert_eq!(extractor.field_names(), vec![BODY_FIELD]);
        assert_eq!(fields.iter().count(), 1);
        assert_eq!(fields.get(BODY_FIELD), Some("plain body"));
    }

    #[test]
    fn body_is_retained() {
        let body = "Corrected Text: A\nFeedback: B";
        assert_eq!(fields_of(&correction_extractor(), body).body(), body);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Short-reply fallback
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn short_unstructured_reply_becomes_feedback() {
        let fields = fields_of(&correction_extractor(), "just some text");
        assert_eq!(
            fields.get("corrected_text"),
            Some("Could not parse correction.")
        );
        assert_eq!(fields.get("feedback"), Some("just some text"));
        assert_eq!(
            fields.field("feedback").map(|f| f.source),
            Some(FieldSource::ShortReply)
        );
    }

    #[test]
    fn short_reply_body_is_trimmed() {
        let fields = fields_of(&translation_extractor(), "  Looks fine to me.\n");
        assert_eq!(fields.get("explanation"), Some("Looks fine to me."));
        assert_eq!(
            fields.get("translation"),
            Some("Could not parse translation.")
        );
    }

    #[test]
    fn long_unstructured_reply_keeps_defaults() {
        let body = "word ".repeat(40);
        let fields = fields_of(&correction_extractor(), &body);
        assert_eq!(fields.get("feedback"), Some("Could not parse feedback."));
    }

    #[test]
    fn threshold_counts_characters_not_bytes() {
        // 149 two-byte characters: under the limit by characters.
        let body = "é".repeat(149);
        let fields = fields_of(&correction_extractor(), &body);
        assert_eq!(fields.get("feedback"), Some(body.as_str()));

        let body = "é".repeat(150);
        let fields = fields_of(&correction_extractor(), &body);
        assert_eq!(fields.get("feedback"), Some("Could not parse feedback."));
    }

    #[test]
    fn secondary_marker_blocks_fallback() {
        let fields = fields_of(&correction_extractor(), "Feedback: all good");
        assert_eq!(fields.get("feedback"), Some("all good"));
        assert_eq!(
            fields.get("corrected_text"),
            Some("Could not parse correction.")
        );
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Classification and whole-body strategy
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn blocked_reply_never_reaches_marker_search() {
        let outcome = correction_extractor().extract(&RawReply::blocked("SAFETY"));
        assert_eq!(
            outcome,
            Extraction::Blocked {
                reason: "SAFETY".to_string()
            }
        );
        assert_eq!(
            outcome.into_result().unwrap_err(),
            RelayError::blocked("SAFETY")
        );
    }

    #[test]
    fn empty_reply_is_reported() {
        let outcome = WholeBodyExtractor::new("reply").extract(&RawReply::Empty);
        assert_eq!(outcome, Extraction::Empty);
        assert_eq!(outcome.into_result().unwrap_err(), RelayError::Empty);

        let blank = RawReply::Text("   ".to_string());
        assert_eq!(
            WholeBodyExtractor::new("reply").extract(&blank),
            Extraction::Empty
        );
    }

    #[test]
    fn whole_body_strategy_returns_body_unchanged() {
        let body = "  Corrected Text: stays\nFeedback: too \n";
        let fields = fields_of(&WholeBodyExtractor::new("details"), body);
        assert_eq!(fields.get("details"), Some(body));
        assert_eq!(
            fields.field("details").map(|f| f.source),
            Some(FieldSource::WholeBody)
        );
    }

    #[test]
    fn field_names_follow_declared_order() {
        assert_eq!(
            correction_extractor().field_names(),
            vec!["corrected_text", "feedback"]
        );
        assert_eq!(WholeBodyExtractor::new("reply").field_names(), vec!["reply"]);
    }
}
