//! SynthesizeSpeechHandler - text-to-speech pass-through.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::{CallerIdentity, RelayError};
use crate::ports::{AudioStream, SpeechRequest, SpeechSynthesizer, VoiceSettings};

/// Command to synthesize speech.
#[derive(Debug, Clone)]
pub struct SynthesizeSpeechCommand {
    pub caller: CallerIdentity,
    pub text: String,
    /// Overrides the configured defaults when present.
    pub voice_settings: Option<VoiceSettings>,
}

pub struct SynthesizeSpeechHandler {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    default_settings: VoiceSettings,
}

impl SynthesizeSpeechHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, default_settings: VoiceSettings) -> Self {
        Self {
            synthesizer,
            default_settings,
        }
    }

    pub async fn handle(&self, cmd: SynthesizeSpeechCommand) -> Result<AudioStream, RelayError> {
        let settings = cmd.voice_settings.unwrap_or(self.default_settings);
        settings.validate()?;

        let request = SpeechRequest::new(cmd.text, settings)
            .map_err(|_| RelayError::invalid_input("Missing required field: text"))?;

        debug!(caller = %cmd.caller.id, text_len = request.text.len(), "Synthesizing speech");

        self.synthesizer.synthesize(request).await.map_err(|e| {
            warn!(error = %e, "Speech synthesis failed");
            RelayError::from(e)
        })
    }
}
