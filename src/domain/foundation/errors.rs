//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Machine-readable error codes returned alongside error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Caller errors
    InvalidInput,
    InvalidJson,
    Unauthorized,

    // Collaborator availability
    NotConfigured,
    AuthUnavailable,

    // Model outcomes
    Blocked,
    Empty,
    EchoedInput,

    // Transport errors
    RateLimited,
    ProviderError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::NotConfigured => "NOT_CONFIGURED",
            ErrorCode::AuthUnavailable => "AUTH_UNAVAILABLE",
            ErrorCode::Blocked => "BLOCKED",
            ErrorCode::Empty => "EMPTY",
            ErrorCode::EchoedInput => "ECHOED_INPUT",
            ErrorCode::RateLimited => "RATE_LIMITED",
            ErrorCode::ProviderError => "PROVIDER_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Failure of a single relay call.
///
/// The display text is what ends up in front of the learner, so it is
/// phrased for them rather than for operators. Missing markers in an
/// otherwise good reply are not an error; see `FieldSource::Default`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RelayError {
    /// Missing or malformed caller fields. No collaborator was contacted.
    #[error("{0}")]
    InvalidInput(String),

    /// A collaborator has no credentials or endpoint.
    #[error("{service} service not configured")]
    NotConfigured { service: &'static str },

    /// The model refused for content-policy reasons.
    #[error("Blocked by safety filters ({reason})")]
    Blocked { reason: String },

    /// The model produced no usable content.
    #[error("AI returned empty result")]
    Empty,

    /// The model repeated the request parameters instead of answering.
    #[error("AI failed (echo received '{preview}...'). Try again.")]
    EchoedInput { preview: String },

    /// Provider quota exhausted.
    #[error("{service} service quota exceeded")]
    RateLimited { service: &'static str },

    /// Network or HTTP failure talking to a collaborator.
    #[error("{0}")]
    Provider(String),
}

impl RelayError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Creates a blocked error.
    pub fn blocked(reason: impl Into<String>) -> Self {
        Self::Blocked {
            reason: reason.into(),
        }
    }

    /// Creates a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider(message.into())
    }

    /// Returns the code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            RelayError::InvalidInput(_) => ErrorCode::InvalidInput,
            RelayError::NotConfigured { .. } => ErrorCode::NotConfigured,
            RelayError::Blocked { .. } => ErrorCode::Blocked,
            RelayError::Empty => ErrorCode::Empty,
            RelayError::EchoedInput { .. } => ErrorCode::EchoedInput,
            RelayError::RateLimited { .. } => ErrorCode::RateLimited,
            RelayError::Provider(_) => ErrorCode::ProviderError,
        }
    }

    /// Returns true if the error was detected before any collaborator call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            RelayError::InvalidInput(_) | RelayError::NotConfigured { .. }
        )
    }
}

impl From<ValidationError> for RelayError {
    fn from(err: ValidationError) -> Self {
        RelayError::InvalidInput(err.to_string())
    }
}
