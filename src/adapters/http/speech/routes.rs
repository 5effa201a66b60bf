//! HTTP routes for the text-to-speech endpoint.

use axum::{routing::post, Router};

use super::handlers::{text_to_speech, SpeechHandlers};

/// Creates the speech router. Mounted under `/api`.
pub fn speech_routes(handlers: SpeechHandlers) -> Router {
    Router::new()
        .route("/elevenlabs_tts", post(text_to_speech))
        .with_state(handlers)
}
