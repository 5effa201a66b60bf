//! Authentication configuration

use serde::Deserialize;

/// Authentication configuration
///
/// Token verification is not wired to an identity provider; every request
/// runs as a fixed caller. `require_bearer` still rejects requests that
/// carry no `Authorization: Bearer` header at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub require_bearer: bool,
}
