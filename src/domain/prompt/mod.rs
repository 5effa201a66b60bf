//! Prompt composition.
//!
//! Turns a bounded conversation history plus a new message, or a task
//! template plus parameters, into the single prompt string sent to the
//! text model. Everything here is a pure function of its inputs.

mod composer;
mod error;
mod persona;
mod template;
mod turn;

pub use composer::{ComposedPrompt, PromptComposer, HUMAN_LABEL};
pub use error::PromptError;
pub use persona::Persona;
pub use template::{InstructionTemplate, Substitutions};
pub use turn::{ConversationWindow, HistoryCap, Speaker, Turn};
