//! HTTP adapter for text-to-speech.

mod dto;
mod handlers;
mod routes;

pub use dto::TtsRequest;
pub use handlers::SpeechHandlers;
pub use routes::speech_routes;
