//! Speech Synthesizer Adapters.
//!
//! - `ElevenLabsSynthesizer` - ElevenLabs text-to-speech
//! - `UnconfiguredSpeechSynthesizer` - Stand-in when no API key is set
//! - `MockSpeechSynthesizer` - Fixed audio for testing

mod elevenlabs;
mod mock;
mod unconfigured;

pub use elevenlabs::{
    ElevenLabsConfig, ElevenLabsSynthesizer, DEFAULT_ELEVENLABS_BASE_URL, DEFAULT_TTS_MODEL_ID,
    DEFAULT_VOICE_ID,
};
pub use mock::MockSpeechSynthesizer;
pub use unconfigured::UnconfiguredSpeechSynthesizer;
