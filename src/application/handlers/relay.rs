//! The shared model call: prompt in, extracted fields out.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::extraction::{ExtractedFields, Extractor, FieldSource};
use crate::domain::foundation::{CallerIdentity, RelayError};
use crate::domain::prompt::ComposedPrompt;
use crate::ports::{AIProvider, CompletionRequest, RequestMetadata};

/// Sends composed prompts to the text model and extracts the reply.
#[derive(Clone)]
pub struct ModelRelay {
    ai_provider: Arc<dyn AIProvider>,
}

impl ModelRelay {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    /// One attempt, no retries. Provider failures are translated into
    /// `RelayError`; blocked and empty replies never reach the extractor.
    pub async fn run(
        &self,
        caller: &CallerIdentity,
        operation: &'static str,
        prompt: ComposedPrompt,
        extractor: &dyn Extractor,
    ) -> Result<ExtractedFields, RelayError> {
        let metadata = RequestMetadata::new(caller.id.clone(), operation);
        let request_id = metadata.request_id;

        debug!(
            %request_id,
            operation,
            caller = %caller.id,
            prompt_len = prompt.len(),
            "Sending prompt to model"
        );

        let response = self
            .ai_provider
            .complete(CompletionRequest::new(prompt, metadata))
            .await
            .map_err(|e| {
                warn!(%request_id, operation, error = %e, "Model call failed");
                RelayError::from(e)
            })?;

        debug!(
            %request_id,
            operation,
            model = %response.model,
            reply_len = response.reply.text_len(),
            total_tokens = response.usage.total_tokens,
            "Model replied"
        );

        let fields = extractor.extract(&response.reply).into_result().map_err(|e| {
            warn!(%request_id, operation, error = %e, "Model reply unusable");
            e
        })?;

        if fields.has_defaults() {
            let missing: Vec<&str> = fields
                .iter()
                .filter(|f| f.source == FieldSource::Default)
                .map(|f| f.name.as_str())
                .collect();
            debug!(%request_id, operation, ?missing, "Reply markers missing; using defaults");
        }

        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::extraction::marker_sets::correction_extractor;
    use crate::domain::extraction::WholeBodyExtractor;
    use crate::domain::foundation::CallerId;

    fn caller() -> CallerIdentity {
        CallerIdentity::new(CallerId::new("learner-1").unwrap())
    }

    #[tokio::test]
    async fn extracts_fields_from_text_reply() {
        let provider = Arc::new(
            MockAIProvider::new().with_response("Corrected Text: I went.\nFeedback: tense"),
        );
        let relay = ModelRelay::new(provider.clone());

        let fields = relay
            .run(
                &caller(),
                "correct_text",
                ComposedPrompt::new("prompt"),
                &correction_extractor(),
            )
            .await
            .unwrap();

        assert_eq!(fields.get("corrected_text"), Some("I went."));
        assert_eq!(fields.get("feedback"), Some("tense"));
        assert_eq!(provider.get_calls()[0].metadata.caller.as_str(), "learner-1");
        assert_eq!(provider.get_calls()[0].metadata.operation, "correct_text");
    }

    #[tokio::test]
    async fn blocked_reply_becomes_error() {
        let relay = ModelRelay::new(Arc::new(MockAIProvider::new().with_blocked("SAFETY")));

        let err = relay
            .run(
                &caller(),
                "chat",
                ComposedPrompt::new("prompt"),
                &WholeBodyExtractor::new("reply"),
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Blocked by safety filters (SAFETY)");
    }

    #[tokio::test]
    async fn provider_error_is_translated() {
        let relay = ModelRelay::new(Arc::new(
            MockAIProvider::new().with_error(MockError::RateLimited),
        ));

        let err = relay
            .run(
                &caller(),
                "chat",
                ComposedPrompt::new("prompt"),
                &WholeBodyExtractor::new("reply"),
            )
            .await
            .unwrap_err();

        assert_eq!(err, RelayError::RateLimited { service: "AI" });
    }
}
