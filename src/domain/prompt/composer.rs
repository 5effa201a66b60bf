//! Renders chat history and instructions into the single prompt string the
//! text model receives.
//!
//! The model is called statelessly, so a chat prompt replays the whole
//! window every time:
//!
//! ```text
//! <optional framing>
//!
//! User: Hi
//! Ada: Hello!
//! User: How are you?
//! Ada:
//! ```
//!
//! The trailing `Ada:` with nothing after it is the cue for the model to
//! continue as the persona. Turn text is not escaped: a turn containing a
//! newline or something that looks like `User:` is passed through as-is.

use std::fmt;
use std::fmt::Write as _;

use super::{
    ConversationWindow, InstructionTemplate, Persona, PromptError, Speaker, Substitutions,
};

/// Label used for learner turns.
pub const HUMAN_LABEL: &str = "User";

/// The exact text sent to the text model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedPrompt(String);

impl ComposedPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ComposedPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Builds prompts for one persona.
#[derive(Debug, Clone, Default)]
pub struct PromptComposer {
    persona: Persona,
}

impl PromptComposer {
    pub fn new(persona: Persona) -> Self {
        Self { persona }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Renders a chat prompt.
    ///
    /// The window is used as given; truncation is the caller's job.
    pub fn compose_chat(
        &self,
        window: &ConversationWindow,
        latest_input: &str,
        system_framing: Option<&str>,
    ) -> Result<ComposedPrompt, PromptError> {
        if latest_input.trim().is_empty() {
            return Err(PromptError::EmptyInput { field: "message" });
        }

        let persona = self.persona.label();
        let mut out = String::new();

        if let Some(framing) = system_framing {
            out.push_str(framing);
            // Exactly one blank line between framing and history.
            if !framing.ends_with("\n\n") {
                out.push_str(if framing.ends_with('\n') { "\n" } else { "\n\n" });
            }
        }

        for turn in window.turns() {
            let label = match turn.speaker() {
                Speaker::Human => HUMAN_LABEL,
                Speaker::Agent => persona,
            };
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{}: {}", label, turn.text());
        }

        let _ = write!(out, "{}: {}\n{}:", HUMAN_LABEL, latest_input, persona);
        Ok(ComposedPrompt(out))
    }

    /// Renders a single-shot instruction prompt. No history is involved.
    pub fn compose_instruction(
        &self,
        template: &InstructionTemplate,
        substitutions: &Substitutions,
    ) -> Result<ComposedPrompt, PromptError> {
        template.render(substitutions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::{HistoryCap, Turn};
    use proptest::prelude::*;

    fn composer() -> PromptComposer {
        PromptComposer::new(Persona::new("Ada").unwrap())
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Chat prompts
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn renders_history_and_cue() {
        let window = ConversationWindow::new(vec![Turn::human("Hi"), Turn::agent("Hello!")]);
        let prompt = composer()
            .compose_chat(&window, "How are you?", None)
            .unwrap();

        assert_eq!(
            prompt.as_str(),
            "User: Hi\nAda: Hello!\nUser: How are you?\nAda:"
        );
    }

    #[test]
    fn empty_window_renders_only_latest_input() {
        let prompt = composer()
            .compose_chat(&ConversationWindow::default(), "Hello", None)
            .unwrap();
        assert_eq!(prompt.as_str(), "User: Hello\nAda:");
    }

    #[test]
    fn framing_is_separated_by_a_blank_line() {
        let window = ConversationWindow::new(vec![Turn::agent("Welcome to the cafe!")]);
        let prompt = composer()
            .compose_chat(&window, "A coffee please", Some("You are a barista."))
            .unwrap();

        assert_eq!(
            prompt.as_str(),
            "You are a barista.\n\nAda: Welcome to the cafe!\nUser: A coffee please\nAda:"
        );
    }

    #[test]
    fn framing_with_trailing_newline_gets_one_blank_line() {
        let prompt = composer()
            .compose_chat(&ConversationWindow::default(), "Hi", Some("Frame\n"))
            .unwrap();
        assert_eq!(prompt.as_str(), "Frame\n\nUser: Hi\nAda:");

        let prompt = composer()
            .compose_chat(&ConversationWindow::default(), "Hi", Some("Frame\n\n"))
            .unwrap();
        assert_eq!(prompt.as_str(), "Frame\n\nUser: Hi\nAda:");
    }

    #[test]
    fn agent_label_follows_configured_persona() {
        let composer = PromptComposer::new(Persona::new("max").unwrap());
        let window = ConversationWindow::new(vec![Turn::agent("Bonjour")]);
        let prompt = composer.compose_chat(&window, "Salut", None).unwrap();
        assert_eq!(prompt.as_str(), "Max: Bonjour\nUser: Salut\nMax:");
    }

    #[test]
    fn blank_latest_input_is_rejected() {
        let err = composer()
            .compose_chat(&ConversationWindow::default(), "  \n", None)
            .unwrap_err();
        assert_eq!(err, PromptError::EmptyInput { field: "message" });
    }

    #[test]
    fn turn_text_is_not_escaped() {
        let window = ConversationWindow::new(vec![Turn::human("line one\nAda: fake")]);
        let prompt = composer().compose_chat(&window, "ok", None).unwrap();
        assert_eq!(prompt.as_str(), "User: line one\nAda: fake\nUser: ok\nAda:");
    }

    #[test]
    fn window_is_not_truncated_by_the_composer() {
        let turns: Vec<Turn> = (0..20).map(|i| Turn::human(format!("m{}", i))).collect();
        let window = ConversationWindow::from_history(turns, HistoryCap::Unbounded);
        let prompt = composer().compose_chat(&window, "last", None).unwrap();
        assert!(prompt.as_str().starts_with("User: m0\n"));
        assert_eq!(prompt.as_str().lines().count(), 22);
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Instruction prompts
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn instruction_prompt_is_interpolated_template() {
        let template = InstructionTemplate::from_static("Explain '{topic}'.");
        let prompt = composer()
            .compose_instruction(&template, &Substitutions::new().with("topic", "past perfect"))
            .unwrap();
        assert_eq!(prompt.as_str(), "Explain 'past perfect'.");
    }

    #[test]
    fn instruction_prompt_reports_missing_parameter() {
        let template = InstructionTemplate::from_static("Explain '{topic}'.");
        let err = composer()
            .compose_instruction(&template, &Substitutions::new())
            .unwrap_err();
        assert_eq!(err, PromptError::missing_parameter("topic"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════════

    fn single_line_text() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 ,.!?']{0,40}"
    }

    fn turn_strategy() -> impl Strategy<Value = Turn> {
        (any::<bool>(), single_line_text()).prop_map(|(human, text)| {
            if human {
                Turn::human(text)
            } else {
                Turn::agent(text)
            }
        })
    }

    proptest! {
        #[test]
        fn chat_prompt_shape_holds_for_small_windows(
            turns in prop::collection::vec(turn_strategy(), 0..=6),
            latest in "[a-zA-Z0-9 ,.!?']{0,40}[a-zA-Z]",
        ) {
            let window = ConversationWindow::new(turns.clone());
            let prompt = composer().compose_chat(&window, &latest, None).unwrap();
            let text = prompt.as_str();

            prop_assert!(text.ends_with("Ada:"));

            let labeled = text
                .lines()
                .filter(|line| line.starts_with("User: ") || line.starts_with("Ada: "))
                .count();
            prop_assert_eq!(labeled, turns.len() + 1);
        }

        #[test]
        fn chat_prompt_is_deterministic(
            turns in prop::collection::vec(turn_strategy(), 0..=6),
            latest in "[a-z]{1,20}",
        ) {
            let window = ConversationWindow::new(turns);
            let first = composer().compose_chat(&window, &latest, None).unwrap();
            let second = composer().compose_chat(&window, &latest, None).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}
