//! HTTP DTOs for the tutoring endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::extraction::ExtractedFields;
use crate::domain::foundation::RelayError;
use crate::domain::prompt::Turn;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A prior turn as the client sends it.
#[derive(Debug, Clone, Deserialize)]
pub struct TurnDto {
    /// `"user"` for the learner; anything else is the tutor.
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub text: String,
}

impl From<TurnDto> for Turn {
    fn from(dto: TurnDto) -> Self {
        Turn::from_sender(&dto.sender, dto.text)
    }
}

/// Parses a raw `history` value.
///
/// Kept loose in the request so that a malformed history is reported as
/// "Invalid history" rather than as unparseable JSON.
pub fn parse_history(history: Option<Value>) -> Result<Vec<Turn>, RelayError> {
    match history {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => serde_json::from_value::<Vec<TurnDto>>(value)
            .map(|turns| turns.into_iter().map(Turn::from).collect())
            .map_err(|_| RelayError::invalid_input("Invalid history")),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
    pub history: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioChatRequest {
    pub scenario: Option<String>,
    pub history: Option<Value>,
    /// Absent when `start` is set.
    pub message: Option<String>,
    #[serde(default)]
    pub start: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTextRequest {
    pub level: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryRequest {
    pub word: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorrectTextRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrammarAidRequest {
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EssayRequest {
    pub topic: Option<String>,
    pub essay_type: Option<String>,
    #[serde(default)]
    pub outline_only: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParaphraseRequest {
    pub text: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslateExplainRequest {
    pub text: Option<String>,
    pub target_language: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// `{reply}` for the chat routes; `error` is set on failure.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Extracted fields keyed by name; `error` is set on failure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FieldsResponse {
    #[serde(flatten)]
    pub fields: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ExtractedFields> for FieldsResponse {
    fn from(fields: ExtractedFields) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|f| (f.name.clone(), f.value.clone()))
                .collect(),
            error: None,
        }
    }
}

impl FieldsResponse {
    /// Same field names as a success, with `marker` in the primary field and
    /// the rest left empty.
    pub fn failure(field_names: &[&str], primary: &str, marker: String, error: &RelayError) -> Self {
        let mut fields: BTreeMap<String, String> = field_names
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        fields.insert(primary.to_string(), marker);
        Self {
            fields,
            error: Some(error.to_string()),
        }
    }
}
