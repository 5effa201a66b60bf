//! AI Provider Port - Interface for the text model.
//!
//! The relay calls the model statelessly: every request carries one fully
//! composed prompt and gets back one [`RawReply`]. Providers classify their
//! own blocked/empty answers so the extractor never sees provider-specific
//! response shapes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::extraction::RawReply;
use crate::domain::foundation::{CallerId, RelayError, RequestId};
use crate::domain::prompt::ComposedPrompt;

/// Port for text-model interactions.
#[async_trait]
pub trait AIProvider: Send + Sync {
    /// Sends one prompt and waits for the whole reply.
    ///
    /// Exactly one attempt is made; callers decide what to do with errors.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Request for a completion.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The exact text sent to the model.
    pub prompt: ComposedPrompt,
    /// Request metadata for tracing.
    pub metadata: RequestMetadata,
}

impl CompletionRequest {
    pub fn new(prompt: ComposedPrompt, metadata: RequestMetadata) -> Self {
        Self { prompt, metadata }
    }
}

/// Request metadata for tracing.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// Caller making the request.
    pub caller: CallerId,
    /// Correlates log lines for one relay call.
    pub request_id: RequestId,
    /// Task or route name, e.g. `chat` or `correct_text`.
    pub operation: &'static str,
}

impl RequestMetadata {
    pub fn new(caller: CallerId, operation: &'static str) -> Self {
        Self {
            caller,
            request_id: RequestId::new(),
            operation,
        }
    }
}

/// Response from the model.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Classified reply.
    pub reply: RawReply,
    /// Model that generated the response.
    pub model: String,
    /// Token usage, when the provider reports it.
    pub usage: TokenUsage,
}

impl CompletionResponse {
    pub fn new(reply: RawReply, model: impl Into<String>) -> Self {
        Self {
            reply,
            model: model.into(),
            usage: TokenUsage::default(),
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = usage;
        self
    }
}

/// Token usage information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl TokenUsage {
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens.saturating_add(completion_tokens),
        }
    }
}

/// Provider information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "gemini", "mock").
    pub name: String,
    /// Model identifier (e.g., "gemini-1.5-flash").
    pub model: String,
}

impl ProviderInfo {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// AI provider errors.
#[derive(Debug, thiserror::Error)]
pub enum AIError {
    /// No API key was configured.
    #[error("provider not configured")]
    NotConfigured,

    /// Provider quota exhausted.
    #[error("rate limited")]
    RateLimited,

    /// The provider rejected the request as malformed.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// API key rejected.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider returned a server error.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl AIError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}

/// Maps provider failures onto learner-facing messages.
///
/// Details stay in the logs; only quota and malformed-request failures get
/// their own wording.
impl From<AIError> for RelayError {
    fn from(err: AIError) -> Self {
        match err {
            AIError::NotConfigured => RelayError::NotConfigured { service: "AI" },
            AIError::RateLimited => RelayError::RateLimited { service: "AI" },
            AIError::InvalidRequest(_) => RelayError::provider("Invalid request to AI"),
            AIError::AuthenticationFailed
            | AIError::Unavailable { .. }
            | AIError::Network(_)
            | AIError::Timeout { .. }
            | AIError::Parse(_) => RelayError::provider("Unexpected AI service error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_metadata() -> RequestMetadata {
        RequestMetadata::new(CallerId::new("test-user").unwrap(), "chat")
    }

    #[test]
    fn completion_request_carries_prompt_and_metadata() {
        let request = CompletionRequest::new(ComposedPrompt::new("User: Hi\nAda:"), test_metadata());

        assert_eq!(request.prompt.as_str(), "User: Hi\nAda:");
        assert_eq!(request.metadata.operation, "chat");
    }

    #[test]
    fn request_metadata_gets_fresh_request_ids() {
        assert_ne!(test_metadata().request_id, test_metadata().request_id);
    }

    #[test]
    fn token_usage_calculates_total() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(usage.total_tokens, 150);
    }

    #[test]
    fn token_usage_total_saturates() {
        let usage = TokenUsage::new(u32::MAX, 7);
        assert_eq!(usage.total_tokens, u32::MAX);
    }

    #[test]
    fn not_configured_maps_to_learner_message() {
        let err: RelayError = AIError::NotConfigured.into();
        assert_eq!(err.to_string(), "AI service not configured");
    }

    #[test]
    fn quota_and_invalid_request_keep_their_wording() {
        let err: RelayError = AIError::RateLimited.into();
        assert_eq!(err.to_string(), "AI service quota exceeded");

        let err: RelayError = AIError::InvalidRequest("bad field".to_string()).into();
        assert_eq!(err.to_string(), "Invalid request to AI");
    }

    #[test]
    fn other_failures_hide_details() {
        for err in [
            AIError::AuthenticationFailed,
            AIError::unavailable("500"),
            AIError::network("reset"),
            AIError::Timeout { timeout_secs: 120 },
            AIError::parse("eof"),
        ] {
            let relay: RelayError = err.into();
            assert_eq!(relay.to_string(), "Unexpected AI service error");
        }
    }

    #[test]
    fn ai_error_displays_correctly() {
        let err = AIError::Timeout { timeout_secs: 30 };
        assert_eq!(err.to_string(), "request timed out after 30s");
    }
}
