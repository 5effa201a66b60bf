//! Runtime configuration.
//!
//! Everything comes from the process environment (plus an optional `.env`).
//! Keys are `LINGUA_RELAY__<SECTION>__<FIELD>`, e.g.
//! `LINGUA_RELAY__SPEECH__VOICE__STABILITY=0.3`. The bare `GOOGLE_API_KEY`,
//! `ELEVENLABS_API_KEY`, `ELEVENLABS_VOICE_ID` and `PORT` variables of earlier
//! deployments are read too, but lose to the prefixed form.
//!
//! ```no_run
//! use lingua_relay::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! println!("listening on {}", config.server.socket_addr()?);
//! # Ok(())
//! # }
//! ```

mod ai;
mod auth;
mod chat;
mod error;
mod server;
mod speech;

pub use ai::AiConfig;
pub use auth::AuthConfig;
pub use chat::ChatConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use speech::{SpeechConfig, VoiceDefaults};

use serde::Deserialize;

/// Unprefixed variables honoured as low-priority defaults, with the key
/// they fill.
const LEGACY_VARIABLES: [(&str, &str); 4] = [
    ("GOOGLE_API_KEY", "ai.google_api_key"),
    ("ELEVENLABS_API_KEY", "speech.elevenlabs_api_key"),
    ("ELEVENLABS_VOICE_ID", "speech.voice_id"),
    ("PORT", "server.port"),
];

/// Every section has defaults, so an empty environment loads. Missing API
/// keys are reported at startup and surface per request as "not configured".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Text model configuration (Gemini)
    #[serde(default)]
    pub ai: AiConfig,

    /// Text-to-speech configuration (ElevenLabs)
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Persona and history windows
    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Reads `.env` (if any), then the legacy variables as defaults, then the
    /// prefixed environment.
    ///
    /// # Errors
    ///
    /// `ConfigError::LoadError` when a value does not parse into its field.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        for (variable, key) in LEGACY_VARIABLES {
            if let Ok(value) = std::env::var(variable) {
                if !value.trim().is_empty() {
                    builder = builder.set_default(key, value)?;
                }
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("LINGUA_RELAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Checks each section in turn and reports the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        self.speech.validate()?;
        self.chat.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
