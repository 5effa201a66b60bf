//! Synthesizer used when no API key is configured.

use async_trait::async_trait;

use crate::ports::{AudioStream, SpeechError, SpeechRequest, SpeechSynthesizer};

/// Fails every call with `SpeechError::NotConfigured` without any I/O.
#[derive(Debug, Clone, Default)]
pub struct UnconfiguredSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for UnconfiguredSpeechSynthesizer {
    async fn synthesize(&self, _request: SpeechRequest) -> Result<AudioStream, SpeechError> {
        Err(SpeechError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::VoiceSettings;

    #[tokio::test]
    async fn every_call_is_not_configured() {
        let request = SpeechRequest::new("Hi", VoiceSettings::default()).unwrap();
        let result = UnconfiguredSpeechSynthesizer.synthesize(request).await;
        assert!(matches!(result, Err(SpeechError::NotConfigured)));
    }
}
