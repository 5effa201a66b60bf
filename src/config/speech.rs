//! Text-to-speech configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::ai::is_http_url;
use super::error::ValidationError;
use crate::adapters::speech::{DEFAULT_ELEVENLABS_BASE_URL, DEFAULT_TTS_MODEL_ID, DEFAULT_VOICE_ID};
use crate::ports::VoiceSettings;

/// Text-to-speech configuration (ElevenLabs)
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// ElevenLabs API key. Unset means speech requests fail with "not configured".
    pub elevenlabs_api_key: Option<Secret<String>>,

    #[serde(default = "default_voice_id")]
    pub voice_id: String,

    #[serde(default = "default_model_id")]
    pub model_id: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Voice settings used when a request carries none
    #[serde(default)]
    pub voice: VoiceDefaults,
}

/// Default voice settings, overridable per request.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct VoiceDefaults {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceDefaults {
    fn default() -> Self {
        let settings = VoiceSettings::default();
        Self {
            stability: settings.stability,
            similarity_boost: settings.similarity_boost,
            style: settings.style,
            use_speaker_boost: settings.use_speaker_boost,
        }
    }
}

impl From<VoiceDefaults> for VoiceSettings {
    fn from(v: VoiceDefaults) -> Self {
        VoiceSettings {
            stability: v.stability,
            similarity_boost: v.similarity_boost,
            style: v.style,
            use_speaker_boost: v.use_speaker_boost,
        }
    }
}

impl SpeechConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// The ElevenLabs key, unless unset or blank.
    pub fn elevenlabs_key(&self) -> Option<&Secret<String>> {
        self.elevenlabs_api_key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
    }

    pub fn has_elevenlabs(&self) -> bool {
        self.elevenlabs_key().is_some()
    }

    pub fn voice_settings(&self) -> VoiceSettings {
        self.voice.into()
    }

    /// Validate text-to-speech configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.voice_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("speech.voice_id"));
        }
        if self.model_id.trim().is_empty() {
            return Err(ValidationError::MissingRequired("speech.model_id"));
        }
        if !is_http_url(&self.base_url) {
            return Err(ValidationError::InvalidBaseUrl("speech.base_url"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidServiceTimeout("speech"));
        }
        for (name, value) in [
            ("stability", self.voice.stability),
            ("similarity_boost", self.voice.similarity_boost),
            ("style", self.voice.style),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::InvalidVoiceSetting(name));
            }
        }
        Ok(())
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            elevenlabs_api_key: None,
            voice_id: default_voice_id(),
            model_id: default_model_id(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            voice: VoiceDefaults::default(),
        }
    }
}

fn default_voice_id() -> String {
    DEFAULT_VOICE_ID.to_string()
}

fn default_model_id() -> String {
    DEFAULT_TTS_MODEL_ID.to_string()
}

fn default_base_url() -> String {
    DEFAULT_ELEVENLABS_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    60
}
