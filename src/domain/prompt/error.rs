//! Prompt composition errors.

use thiserror::Error;

use crate::domain::foundation::RelayError;

/// Errors raised while composing a prompt.
///
/// All of them are caller mistakes and surface as `InvalidInput`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PromptError {
    /// The latest chat message is missing or blank.
    #[error("Missing required field: {field}")]
    EmptyInput { field: &'static str },

    /// A template placeholder has no (or a blank) value.
    #[error("Missing required field: {name}")]
    MissingParameter { name: String },
}

impl PromptError {
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }
}

impl From<PromptError> for RelayError {
    fn from(err: PromptError) -> Self {
        RelayError::InvalidInput(err.to_string())
    }
}
