//! HTTP handlers for the text-to-speech endpoint.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_json, status_for, ErrorResponse};
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{SynthesizeSpeechCommand, SynthesizeSpeechHandler};

use super::dto::TtsRequest;

#[derive(Clone)]
pub struct SpeechHandlers {
    synthesize_handler: Arc<SynthesizeSpeechHandler>,
}

impl SpeechHandlers {
    pub fn new(synthesize_handler: Arc<SynthesizeSpeechHandler>) -> Self {
        Self { synthesize_handler }
    }
}

/// POST /api/elevenlabs_tts - Stream `audio/mpeg` for the given text
pub async fn text_to_speech(
    State(handlers): State<SpeechHandlers>,
    RequireAuth(caller): RequireAuth,
    payload: Result<Json<TtsRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return invalid_json(rejection),
    };

    let cmd = SynthesizeSpeechCommand {
        caller,
        text: req.text.unwrap_or_default(),
        voice_settings: req.voice_settings,
    };

    match handlers.synthesize_handler.handle(cmd).await {
        Ok(audio) => (
            [(header::CONTENT_TYPE, "audio/mpeg")],
            Body::from_stream(audio),
        )
            .into_response(),
        Err(e) => (status_for(&e), Json(ErrorResponse::new(e.code(), e.to_string()))).into_response(),
    }
}
