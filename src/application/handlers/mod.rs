//! Application handlers.
//!
//! Command handlers that compose prompts, call collaborators through their
//! ports and shape the results.

mod chat;
mod instruction;
mod relay;
mod speech;

pub use chat::{ChatCommand, ChatHandler, ScenarioChatCommand, ScenarioChatHandler};
pub use instruction::{RunInstructionCommand, RunInstructionHandler};
pub use relay::ModelRelay;
pub use speech::{SynthesizeSpeechCommand, SynthesizeSpeechHandler};
