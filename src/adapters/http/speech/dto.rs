//! HTTP DTOs for the text-to-speech endpoint.

use serde::Deserialize;

use crate::ports::VoiceSettings;

/// Request to synthesize speech.
///
/// Missing `voice_settings` uses the configured defaults; a partial object
/// fills the rest from the provider defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct TtsRequest {
    pub text: Option<String>,
    pub voice_settings: Option<VoiceSettings>,
}
