//! ElevenLabs text-to-speech adapter.
//!
//! Posts the text and voice settings to the voice's text-to-speech endpoint
//! and forwards the `audio/mpeg` body as a byte stream.

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Serialize;
use std::time::Duration;

use crate::ports::{AudioStream, SpeechError, SpeechRequest, SpeechSynthesizer, VoiceSettings};

pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_VOICE_ID: &str = "XrExE9yKIg1WjnnlVkGX";
pub const DEFAULT_TTS_MODEL_ID: &str = "eleven_multilingual_v2";

/// Longest provider error body kept in an error.
const MAX_ERROR_DETAIL: usize = 300;

/// Configuration for the ElevenLabs adapter.
#[derive(Debug, Clone)]
pub struct ElevenLabsConfig {
    api_key: Secret<String>,
    pub voice_id: String,
    pub model_id: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ElevenLabsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_TTS_MODEL_ID.to_string(),
            base_url: DEFAULT_ELEVENLABS_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_voice_id(mut self, voice_id: impl Into<String>) -> Self {
        self.voice_id = voice_id.into();
        self
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// ElevenLabs speech synthesizer.
pub struct ElevenLabsSynthesizer {
    config: ElevenLabsConfig,
    client: Client,
}

impl ElevenLabsSynthesizer {
    pub fn new(config: ElevenLabsConfig) -> Result<Self, SpeechError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| SpeechError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn synthesis_url(&self) -> String {
        format!(
            "{}/v1/text-to-speech/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.voice_id
        )
    }

    fn to_request_body<'a>(&'a self, request: &'a SpeechRequest) -> TtsRequestBody<'a> {
        TtsRequestBody {
            text: &request.text,
            model_id: &self.config.model_id,
            voice_settings: request.voice_settings,
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> SpeechError {
        if e.is_timeout() {
            SpeechError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else {
            SpeechError::network(e.to_string())
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsSynthesizer {
    async fn synthesize(&self, request: SpeechRequest) -> Result<AudioStream, SpeechError> {
        let response = self
            .client
            .post(self.synthesis_url())
            .header("xi-api-key", self.config.api_key())
            .header("Accept", "audio/mpeg")
            .json(&self.to_request_body(&request))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let detail: String = detail.chars().take(MAX_ERROR_DETAIL).collect();
            tracing::warn!(status = status.as_u16(), detail = %detail, "Text-to-speech request rejected");
            return Err(SpeechError::provider(status.as_u16(), detail));
        }

        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| SpeechError::network(format!("Stream error: {}", e))));

        Ok(Box::pin(stream))
    }
}

#[derive(Debug, Serialize)]
struct TtsRequestBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesizer() -> ElevenLabsSynthesizer {
        ElevenLabsSynthesizer::new(
            ElevenLabsConfig::new("test-key").with_base_url("https://tts.example.com/"),
        )
        .unwrap()
    }

    #[test]
    fn config_defaults_match_deployment() {
        let config = ElevenLabsConfig::new("key");
        assert_eq!(config.voice_id, "XrExE9yKIg1WjnnlVkGX");
        assert_eq!(config.base_url, "https://api.elevenlabs.io");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.api_key(), "key");
    }

    #[test]
    fn synthesis_url_includes_voice() {
        assert_eq!(
            synthesizer().synthesis_url(),
            "https://tts.example.com/v1/text-to-speech/XrExE9yKIg1WjnnlVkGX"
        );
    }

    #[test]
    fn request_body_carries_voice_settings() {
        let synth = synthesizer();
        let request = SpeechRequest::new("Hello there", VoiceSettings::default()).unwrap();
        let json = serde_json::to_value(synth.to_request_body(&request)).unwrap();

        assert_eq!(json["text"], "Hello there");
        assert_eq!(json["model_id"], DEFAULT_TTS_MODEL_ID);
        assert_eq!(json["voice_settings"]["stability"], 0.5);
        assert_eq!(json["voice_settings"]["use_speaker_boost"], true);
    }
}
