//! Named fields recovered from a reply.

use serde::Serialize;

/// How a field got its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Text between the field's marker and the next marker.
    Marker,
    /// The whole reply body (single-field strategy).
    WholeBody,
    /// A short unstructured reply moved into this field.
    ShortReply,
    /// The marker was missing; the declared default was used.
    Default,
}

/// One extracted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedField {
    pub name: String,
    pub value: String,
    pub source: FieldSource,
}

/// All fields of one reply, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    fields: Vec<ExtractedField>,
    /// The unparsed reply, kept for diagnostics.
    body: String,
}

impl ExtractedFields {
    pub fn new(fields: Vec<ExtractedField>, body: impl Into<String>) -> Self {
        Self {
            fields,
            body: body.into(),
        }
    }

    /// Value of the named field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    pub fn field(&self, name: &str) -> Option<&ExtractedField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtractedField> {
        self.fields.iter()
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// True when at least one field fell back to its default.
    pub fn has_defaults(&self) -> bool {
        self.fields.iter().any(|f| f.source == FieldSource::Default)
    }

    /// Replaces the value of one field, leaving the others untouched.
    pub(crate) fn set(&mut self, name: &str, value: String, source: FieldSource) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.name == name) {
            field.value = value;
            field.source = source;
        }
    }
}
