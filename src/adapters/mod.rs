//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Text model providers (Gemini, mock, unconfigured)
//! - `speech` - Text-to-speech providers (ElevenLabs, mock, unconfigured)
//! - `auth` - Session validators
//! - `http` - axum routes, handlers and middleware

pub mod ai;
pub mod auth;
pub mod http;
pub mod speech;
