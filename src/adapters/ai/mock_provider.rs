//! Scripted stand-in for the language model.
//!
//! Replies are queued up front and handed out in order; once the queue is
//! drained every call gets a fixed canned reply. Each request is recorded so
//! tests can assert on the exact prompt text that would have been sent.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("Hello, I'm Ada!")
//!     .with_error(MockError::RateLimited);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::extraction::RawReply;
use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo, TokenUsage,
};

#[derive(Debug, Clone)]
pub struct MockAIProvider {
    queue: Arc<Mutex<VecDeque<MockResponse>>>,
    info: ProviderInfo,
    /// Applied before every reply, for timeout tests.
    delay: Duration,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

#[derive(Debug, Clone)]
pub enum MockResponse {
    Reply(RawReply),
    Error(MockError),
}

/// Owned mirror of the provider failures a test can inject.
#[derive(Debug, Clone)]
pub enum MockError {
    NotConfigured,
    RateLimited,
    InvalidRequest { message: String },
    AuthenticationFailed,
    Unavailable { message: String },
    Network { message: String },
    Timeout { timeout_secs: u64 },
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::NotConfigured => AIError::NotConfigured,
            MockError::RateLimited => AIError::RateLimited,
            MockError::InvalidRequest { message } => AIError::InvalidRequest(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout { timeout_secs } => AIError::Timeout { timeout_secs },
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            queue: Arc::new(Mutex::new(VecDeque::new())),
            info: ProviderInfo::new("mock", "mock-model-1"),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a text reply to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.with_reply(RawReply::from_text(content))
    }

    /// Adds a blocked reply to the queue.
    pub fn with_blocked(self, reason: impl Into<String>) -> Self {
        self.with_reply(RawReply::blocked(reason))
    }

    /// Adds an arbitrary reply to the queue.
    pub fn with_reply(self, reply: RawReply) -> Self {
        self.push(MockResponse::Reply(reply));
        self
    }

    /// Queues a failure for the next unanswered call.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.lock_calls().clone()
    }

    /// Returns the prompt of the most recent call.
    pub fn last_prompt(&self) -> Option<String> {
        self.lock_calls()
            .last()
            .map(|call| call.prompt.as_str().to_string())
    }

    fn push(&self, response: MockResponse) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(response);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<CompletionRequest>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Falls back to a canned reply when the queue is empty.
    fn next_response(&self) -> MockResponse {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
            .unwrap_or_else(|| MockResponse::Reply(RawReply::from_text("Mock response")))
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.lock_calls().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Reply(reply) => Ok(CompletionResponse::new(reply, self.info.model.clone())
                .with_usage(TokenUsage::new(10, 20))),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.info.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::CallerId;
    use crate::domain::prompt::ComposedPrompt;
    use crate::ports::RequestMetadata;

    fn test_request(prompt: &str) -> CompletionRequest {
        CompletionRequest::new(
            ComposedPrompt::new(prompt),
            RequestMetadata::new(CallerId::new("test-user").unwrap(), "test"),
        )
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_response() {
        let provider = MockAIProvider::new().with_response("Hello from mock!");

        let response = provider.complete(test_request("Hi")).await.unwrap();

        assert_eq!(response.reply, RawReply::Text("Hello from mock!".to_string()));
        assert_eq!(response.model, "mock-model-1");
    }

    #[tokio::test]
    async fn mock_provider_returns_responses_in_order() {
        let provider = MockAIProvider::new()
            .with_response("First")
            .with_blocked("SAFETY");

        let first = provider.complete(test_request("1")).await.unwrap();
        let second = provider.complete(test_request("2")).await.unwrap();

        assert_eq!(first.reply, RawReply::Text("First".to_string()));
        assert_eq!(second.reply, RawReply::blocked("SAFETY"));
    }

    #[tokio::test]
    async fn mock_provider_returns_default_when_queue_empty() {
        let provider = MockAIProvider::new();

        let response = provider.complete(test_request("Hi")).await.unwrap();

        assert_eq!(response.reply, RawReply::Text("Mock response".to_string()));
    }

    #[tokio::test]
    async fn mock_provider_returns_configured_error() {
        let provider = MockAIProvider::new().with_error(MockError::RateLimited);

        let result = provider.complete(test_request("Hi")).await;

        assert!(matches!(result, Err(AIError::RateLimited)));
    }

    #[tokio::test]
    async fn mock_provider_tracks_calls() {
        let provider = MockAIProvider::new();

        provider.complete(test_request("one")).await.unwrap();
        provider.complete(test_request("two")).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(provider.last_prompt().as_deref(), Some("two"));
        assert_eq!(provider.get_calls()[0].prompt.as_str(), "one");
    }

    #[tokio::test]
    async fn mock_provider_simulates_delay() {
        let provider = MockAIProvider::new().with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        provider.complete(test_request("Hi")).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
