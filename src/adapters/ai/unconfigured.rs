//! Provider used when no API key is configured.

use async_trait::async_trait;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// Fails every call with `AIError::NotConfigured` without any I/O.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredAIProvider;

#[async_trait]
impl AIProvider for UnconfiguredAIProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        Err(AIError::NotConfigured)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("unconfigured", "none")
    }
}
