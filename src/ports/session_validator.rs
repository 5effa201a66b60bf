//! Session validation port.
//!
//! Resolves the caller of a request from its bearer token. Token
//! verification is currently disabled in deployments, so the default
//! adapter accepts every caller; the port keeps the middleware unchanged
//! when a real verifier is plugged in.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, CallerIdentity};

/// Resolves the caller identity from an optional bearer token.
///
/// # Contract
///
/// Implementations must:
/// - Return `AuthError::MissingToken` when they require a token and none was sent
/// - Return `AuthError::InvalidToken` for tokens they reject
/// - Return `AuthError::ServiceUnavailable` for transient errors
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token (without the "Bearer " prefix), if any.
    async fn validate(&self, token: Option<&str>) -> Result<CallerIdentity, AuthError>;
}
