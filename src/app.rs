//! Composition root: adapters, application handlers and routes.

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::Router;
use secrecy::ExposeSecret;
use thiserror::Error;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::adapters::ai::{GeminiConfig, GeminiProvider, UnconfiguredAIProvider};
use crate::adapters::auth::PassthroughSessionValidator;
use crate::adapters::http::{api_router, health_routes, HealthState, SpeechHandlers, TutorHandlers};
use crate::adapters::speech::{
    ElevenLabsConfig, ElevenLabsSynthesizer, UnconfiguredSpeechSynthesizer,
};
use crate::application::{
    ChatHandler, RunInstructionHandler, ScenarioChatHandler, SynthesizeSpeechHandler,
};
use crate::config::{AppConfig, ConfigError, ServerConfig, ValidationError};
use crate::domain::prompt::PromptComposer;
use crate::ports::{AIError, AIProvider, SessionValidator, SpeechError, SpeechSynthesizer};

/// Failures that stop the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Text model client: {0}")]
    Ai(#[from] AIError),

    #[error("Speech client: {0}")]
    Speech(#[from] SpeechError),

    #[error("Server I/O: {0}")]
    Io(#[from] std::io::Error),
}

/// The outbound ports the router depends on.
pub struct Collaborators {
    pub ai_provider: Arc<dyn AIProvider>,
    pub speech_synthesizer: Arc<dyn SpeechSynthesizer>,
    pub session_validator: Arc<dyn SessionValidator>,
}

impl Collaborators {
    /// Real adapters for every configured key; stand-ins that answer
    /// "not configured" for the rest.
    pub fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        let ai_provider: Arc<dyn AIProvider> = match config.ai.google_key() {
            Some(key) => {
                let gemini = GeminiConfig::new(key.expose_secret().clone())
                    .with_model(config.ai.model.clone())
                    .with_base_url(config.ai.base_url.clone())
                    .with_timeout(config.ai.timeout());
                Arc::new(GeminiProvider::new(gemini)?)
            }
            None => {
                warn!("No Gemini API key configured; text endpoints will report the AI service as not configured");
                Arc::new(UnconfiguredAIProvider)
            }
        };

        let provider = ai_provider.provider_info();
        info!(provider = %provider.name, model = %provider.model, "Text model provider ready");

        let speech_synthesizer: Arc<dyn SpeechSynthesizer> =
            match config.speech.elevenlabs_key() {
                Some(key) => {
                    let elevenlabs = ElevenLabsConfig::new(key.expose_secret().clone())
                        .with_voice_id(config.speech.voice_id.clone())
                        .with_model_id(config.speech.model_id.clone())
                        .with_base_url(config.speech.base_url.clone())
                        .with_timeout(config.speech.timeout());
                    info!(voice_id = %config.speech.voice_id, "Text-to-speech configured");
                    Arc::new(ElevenLabsSynthesizer::new(elevenlabs)?)
                }
                None => {
                    warn!("No ElevenLabs API key configured; text-to-speech will report not configured");
                    Arc::new(UnconfiguredSpeechSynthesizer)
                }
            };

        if !config.auth.require_bearer {
            warn!("Token verification disabled; all requests run as a placeholder caller");
        }

        Ok(Self {
            ai_provider,
            speech_synthesizer,
            session_validator: Arc::new(PassthroughSessionValidator::new(
                config.auth.require_bearer,
            )),
        })
    }
}

/// Builds the full router: `/health`, the `/api` routes, and the CORS,
/// timeout and trace layers.
pub fn build_router(
    collaborators: Collaborators,
    config: &AppConfig,
) -> Result<Router, ValidationError> {
    let composer = Arc::new(PromptComposer::new(config.chat.persona()?));
    let ai = collaborators.ai_provider;

    let tutor = TutorHandlers::new(
        Arc::new(ChatHandler::new(
            ai.clone(),
            composer.clone(),
            config.chat.history_cap(),
        )),
        Arc::new(ScenarioChatHandler::new(
            ai.clone(),
            composer.clone(),
            config.chat.scenario_history_cap(),
        )),
        Arc::new(RunInstructionHandler::new(ai, composer)),
    );
    let speech = SpeechHandlers::new(Arc::new(SynthesizeSpeechHandler::new(
        collaborators.speech_synthesizer,
        config.speech.voice_settings(),
    )));

    let health = HealthState {
        ai_configured: config.ai.has_google(),
        speech_configured: config.speech.has_elevenlabs(),
    };

    Ok(health_routes(health)
        .merge(api_router(tutor, speech, collaborators.session_validator))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_unconfigured_adapters() {
        let collaborators = Collaborators::from_config(&AppConfig::default()).unwrap();
        assert!(build_router(collaborators, &AppConfig::default()).is_ok());
    }

    #[test]
    fn configured_key_selects_gemini_provider() {
        let mut config = AppConfig::default();
        config.ai.google_api_key = Some(secrecy::Secret::new("AIza-key".to_string()));

        let collaborators = Collaborators::from_config(&config).unwrap();

        assert_eq!(collaborators.ai_provider.provider_info().name, "gemini");
    }

    #[test]
    fn blank_key_falls_back_to_unconfigured_provider() {
        let mut config = AppConfig::default();
        config.ai.google_api_key = Some(secrecy::Secret::new(" ".to_string()));

        let collaborators = Collaborators::from_config(&config).unwrap();

        assert_eq!(collaborators.ai_provider.provider_info().name, "unconfigured");
    }

    #[test]
    fn invalid_persona_fails_router_build() {
        let mut config = AppConfig::default();
        config.chat.persona = "Ada: the tutor".to_string();
        let collaborators = Collaborators::from_config(&config).unwrap();

        assert!(matches!(
            build_router(collaborators, &config),
            Err(ValidationError::InvalidPersona)
        ));
    }

    #[test]
    fn explicit_cors_origins_are_accepted() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let _ = cors_layer(&server);
    }
}
