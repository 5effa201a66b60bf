//! Speech Synthesizer Port - text to streamed audio.
//!
//! The relay passes audio through without buffering it: the adapter hands
//! back a byte stream that the HTTP layer forwards as the response body.

use std::pin::Pin;

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{RelayError, ValidationError};

/// Streamed audio bytes (`audio/mpeg`).
pub type AudioStream = Pin<Box<dyn Stream<Item = Result<Bytes, SpeechError>> + Send>>;

/// Port for text-to-speech providers.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Starts synthesis and returns the audio as it arrives.
    ///
    /// Errors before the first byte (auth, quota, bad request) are returned
    /// directly; later transport errors surface as stream items.
    async fn synthesize(&self, request: SpeechRequest) -> Result<AudioStream, SpeechError>;
}

/// Text plus voice tuning for one synthesis call.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    pub text: String,
    pub voice_settings: VoiceSettings,
}

impl SpeechRequest {
    /// Builds a request, rejecting blank text.
    pub fn new(text: impl Into<String>, voice_settings: VoiceSettings) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            text,
            voice_settings,
        })
    }
}

/// Voice tuning passed through to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    pub style: f32,
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.0,
            use_speaker_boost: true,
        }
    }
}

impl VoiceSettings {
    /// Checks that every ratio lies in `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("stability", self.stability),
            ("similarity_boost", self.similarity_boost),
            ("style", self.style),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ValidationError::invalid_format(
                    field,
                    "must be between 0.0 and 1.0",
                ));
            }
        }
        Ok(())
    }
}

/// Speech provider errors.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SpeechError {
    /// No API key was configured.
    #[error("speech provider not configured")]
    NotConfigured,

    /// Provider answered with a non-success status.
    #[error("provider returned {status}: {detail}")]
    Provider {
        /// HTTP status from the provider.
        status: u16,
        /// Error body or reason, truncated.
        detail: String,
    },

    /// Network error during request or while streaming.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl SpeechError {
    pub fn provider(status: u16, detail: impl Into<String>) -> Self {
        Self::Provider {
            status,
            detail: detail.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

impl From<SpeechError> for RelayError {
    fn from(err: SpeechError) -> Self {
        match err {
            SpeechError::NotConfigured => RelayError::NotConfigured {
                service: "Text-to-speech",
            },
            SpeechError::Provider { status: 429, .. } => RelayError::RateLimited {
                service: "Text-to-speech",
            },
            SpeechError::Provider { status, .. } => {
                RelayError::provider(format!("Text-to-speech failed (status {})", status))
            }
            SpeechError::Network(_) | SpeechError::Timeout { .. } => {
                RelayError::provider("Text-to-speech service unreachable")
            }
        }
    }
}
