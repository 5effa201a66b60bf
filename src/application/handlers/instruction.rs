//! RunInstructionHandler - single-shot tutoring tasks.
//!
//! Every task goes through the same steps: render its template, call the
//! model once, extract the declared fields, then apply the task's reply
//! guard.

use std::sync::Arc;

use tracing::info;

use super::relay::ModelRelay;
use crate::domain::extraction::ExtractedFields;
use crate::domain::foundation::{CallerIdentity, RelayError};
use crate::domain::prompt::{PromptComposer, Substitutions};
use crate::domain::tutor::TutorTask;
use crate::ports::AIProvider;

/// Command to run one tutoring task.
#[derive(Debug, Clone)]
pub struct RunInstructionCommand {
    pub caller: CallerIdentity,
    pub task: TutorTask,
    pub substitutions: Substitutions,
}

impl RunInstructionCommand {
    pub fn new(caller: CallerIdentity, task: TutorTask, substitutions: Substitutions) -> Self {
        Self {
            caller,
            task,
            substitutions,
        }
    }
}

/// Handler for single-shot tutoring tasks.
pub struct RunInstructionHandler {
    relay: ModelRelay,
    composer: Arc<PromptComposer>,
}

impl RunInstructionHandler {
    pub fn new(ai_provider: Arc<dyn AIProvider>, composer: Arc<PromptComposer>) -> Self {
        Self {
            relay: ModelRelay::new(ai_provider),
            composer,
        }
    }

    pub async fn handle(&self, cmd: RunInstructionCommand) -> Result<ExtractedFields, RelayError> {
        let task = cmd.task;
        let prompt = self
            .composer
            .compose_instruction(task.template(), &cmd.substitutions)?;

        let extractor = task.extractor();
        let fields = self
            .relay
            .run(
                &cmd.caller,
                task.name(),
                prompt,
                extractor.as_ref(),
            )
            .await?;

        task.reply_guard().check(fields.body(), &cmd.substitutions)?;

        info!(task = task.name(), "Tutoring task completed");
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::domain::foundation::CallerId;
    use crate::domain::tutor::describe_level;

    fn caller() -> CallerIdentity {
        CallerIdentity::new(CallerId::new("learner-1").unwrap())
    }

    fn handler(provider: Arc<MockAIProvider>) -> RunInstructionHandler {
        RunInstructionHandler::new(provider, Arc::new(PromptComposer::default()))
    }

    fn generate_text_subs(level: &str) -> Substitutions {
        Substitutions::new()
            .with("topic", "Travel")
            .with("level", level)
            .with("level_description", describe_level(level))
    }

    #[tokio::test]
    async fn runs_template_and_returns_whole_body() {
        let provider = Arc::new(MockAIProvider::new().with_response("**serendipity** (noun)"));
        let handler = handler(provider.clone());

        let fields = handler
            .handle(RunInstructionCommand::new(
                caller(),
                TutorTask::Dictionary,
                Substitutions::new().with("word", "serendipity"),
            ))
            .await
            .unwrap();

        assert_eq!(fields.get("details"), Some("**serendipity** (noun)"));
        let prompt = provider.last_prompt().unwrap();
        assert!(prompt.contains("\"serendipity\""));
    }

    #[tokio::test]
    async fn missing_parameter_fails_without_calling_model() {
        let provider = Arc::new(MockAIProvider::new());
        let handler = handler(provider.clone());

        let err = handler
            .handle(RunInstructionCommand::new(
                caller(),
                TutorTask::GrammarAid,
                Substitutions::new().with("topic", "   "),
            ))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            RelayError::InvalidInput("Missing required field: topic".to_string())
        );
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn generated_text_echo_is_rejected() {
        let provider = Arc::new(MockAIProvider::new().with_response("Advanced"));
        let handler = handler(provider);

        let err = handler
            .handle(RunInstructionCommand::new(
                caller(),
                TutorTask::GenerateText,
                generate_text_subs("advanced"),
            ))
            .await
            .unwrap_err();

        assert!(matches!(err, RelayError::EchoedInput { .. }));
    }

    #[tokio::test]
    async fn generated_text_prompt_uses_level_description() {
        let provider = Arc::new(MockAIProvider::new().with_response("Anna packs her bag."));
        let handler = handler(provider.clone());

        let fields = handler
            .handle(RunInstructionCommand::new(
                caller(),
                TutorTask::GenerateText,
                generate_text_subs("beginner"),
            ))
            .await
            .unwrap();

        assert_eq!(fields.get("generated_text"), Some("Anna packs her bag."));
        assert!(provider
            .last_prompt()
            .unwrap()
            .contains("Proficiency Level: beginner (CEFR A1-A2)"));
    }

    #[tokio::test]
    async fn empty_reply_is_an_error() {
        let provider = Arc::new(MockAIProvider::new().with_response("  "));
        let handler = handler(provider);

        let err = handler
            .handle(RunInstructionCommand::new(
                caller(),
                TutorTask::Summarize,
                Substitutions::new().with("text", "Long article"),
            ))
            .await
            .unwrap_err();

        assert_eq!(err, RelayError::Empty);
    }
}
