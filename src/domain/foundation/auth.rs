//! Authentication types for the domain layer.
//!
//! The relay never inspects how a caller was authenticated. Whatever sits
//! behind the `SessionValidator` port hands back a `CallerIdentity` or an
//! `AuthError`, and the rest of the system only ever sees the opaque id.

use super::CallerId;
use thiserror::Error;

/// Identity of the caller, produced by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Opaque identifier from the auth provider.
    pub id: CallerId,
}

impl CallerIdentity {
    /// Creates a new caller identity.
    pub fn new(id: CallerId) -> Self {
        Self { id }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// No bearer token was supplied but one is required.
    #[error("Missing bearer token")]
    MissingToken,

    /// The token is malformed or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The authentication service is unavailable (network, config, etc.).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, AuthError::ServiceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_identity_keeps_id() {
        let identity = CallerIdentity::new(CallerId::new("caller-1").unwrap());
        assert_eq!(identity.id.as_str(), "caller-1");
    }

    #[test]
    fn auth_error_messages() {
        assert_eq!(AuthError::MissingToken.to_string(), "Missing bearer token");
        assert_eq!(AuthError::InvalidToken.to_string(), "Invalid or expired token");
        assert_eq!(
            AuthError::service_unavailable("Connection refused").to_string(),
            "Auth service unavailable: Connection refused"
        );
    }

    #[test]
    fn auth_error_is_transient_for_service_errors() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(!AuthError::InvalidToken.is_transient());
        assert!(!AuthError::MissingToken.is_transient());
    }
}
