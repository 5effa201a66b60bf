//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the relay core and its collaborators. Adapters implement these ports.
//!
//! - `AIProvider` - text model completions
//! - `SpeechSynthesizer` - text-to-speech audio streams
//! - `SessionValidator` - caller identity from bearer tokens

mod ai_provider;
mod session_validator;
mod speech_synthesizer;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo,
    RequestMetadata, TokenUsage,
};
pub use session_validator::SessionValidator;
pub use speech_synthesizer::{
    AudioStream, SpeechError, SpeechRequest, SpeechSynthesizer, VoiceSettings,
};
