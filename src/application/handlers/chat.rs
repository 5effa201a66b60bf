//! Chat handlers: open conversation practice and role-play scenarios.
//!
//! Both replay the caller-supplied history into a single prompt on every
//! call; nothing is stored between requests. They differ in how much history
//! they keep and in the framing placed before it.

use std::sync::Arc;

use tracing::info;

use super::relay::ModelRelay;
use crate::domain::extraction::WholeBodyExtractor;
use crate::domain::foundation::{CallerIdentity, RelayError};
use crate::domain::prompt::{ConversationWindow, HistoryCap, PromptComposer, Substitutions, Turn};
use crate::domain::tutor::templates::{SCENARIO_FRAMING, SCENARIO_OPENING};
use crate::ports::AIProvider;

const REPLY_FIELD: &str = "reply";

/// Command to continue an open chat.
#[derive(Debug, Clone)]
pub struct ChatCommand {
    pub caller: CallerIdentity,
    pub history: Vec<Turn>,
    pub message: String,
}

/// Handler for open chat.
pub struct ChatHandler {
    relay: ModelRelay,
    composer: Arc<PromptComposer>,
    history_cap: HistoryCap,
}

impl ChatHandler {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        composer: Arc<PromptComposer>,
        history_cap: HistoryCap,
    ) -> Self {
        Self {
            relay: ModelRelay::new(ai_provider),
            composer,
            history_cap,
        }
    }

    /// Returns the persona's reply.
    pub async fn handle(&self, cmd: ChatCommand) -> Result<String, RelayError> {
        let window = ConversationWindow::from_history(cmd.history, self.history_cap);
        let prompt = self.composer.compose_chat(&window, &cmd.message, None)?;

        let fields = self
            .relay
            .run(
                &cmd.caller,
                "chat",
                prompt,
                &WholeBodyExtractor::new(REPLY_FIELD),
            )
            .await?;

        info!(turns = window.len(), "Chat reply generated");
        Ok(fields.get(REPLY_FIELD).unwrap_or_default().to_string())
    }
}

/// Command to start or continue a role-play scenario.
#[derive(Debug, Clone)]
pub struct ScenarioChatCommand {
    pub caller: CallerIdentity,
    pub scenario: String,
    pub history: Vec<Turn>,
    pub message: Option<String>,
    /// Ask for the persona's opening line instead of a reply.
    pub start: bool,
}

/// Handler for role-play scenarios.
pub struct ScenarioChatHandler {
    relay: ModelRelay,
    composer: Arc<PromptComposer>,
    history_cap: HistoryCap,
}

impl ScenarioChatHandler {
    pub fn new(
        ai_provider: Arc<dyn AIProvider>,
        composer: Arc<PromptComposer>,
        history_cap: HistoryCap,
    ) -> Self {
        Self {
            relay: ModelRelay::new(ai_provider),
            composer,
            history_cap,
        }
    }

    pub async fn handle(&self, cmd: ScenarioChatCommand) -> Result<String, RelayError> {
        if cmd.scenario.trim().is_empty() {
            return Err(RelayError::invalid_input("Scenario description required"));
        }

        let message = cmd.message.as_deref().unwrap_or_default();
        if !cmd.start && message.trim().is_empty() {
            return Err(RelayError::invalid_input("User message required"));
        }

        let scenario = Substitutions::new()
            .with("persona", self.composer.persona().label())
            .with("scenario", cmd.scenario.as_str());

        let (prompt, operation) = if cmd.start {
            let prompt = self.composer.compose_instruction(&SCENARIO_OPENING, &scenario)?;
            (prompt, "scenario_start")
        } else {
            let framing = SCENARIO_FRAMING.render(&scenario)?;
            let window = ConversationWindow::from_history(cmd.history, self.history_cap);
            let prompt =
                self.composer
                    .compose_chat(&window, message, Some(framing.as_str()))?;
            (prompt, "scenario_chat")
        };

        let fields = self
            .relay
            .run(
                &cmd.caller,
                operation,
                prompt,
                &WholeBodyExtractor::new(REPLY_FIELD),
            )
            .await?;

        info!(operation, "Scenario reply generated");
        Ok(fields.get(REPLY_FIELD).unwrap_or_default().to_string())
    }
}
