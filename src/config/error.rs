//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid {0} timeout")]
    InvalidServiceTimeout(&'static str),

    #[error("History limit must be at least 1")]
    InvalidHistoryLimit,

    #[error("Invalid persona name")]
    InvalidPersona,

    #[error("Voice setting {0} must be between 0 and 1")]
    InvalidVoiceSetting(&'static str),

    #[error("{0} must use http or https")]
    InvalidBaseUrl(&'static str),
}
