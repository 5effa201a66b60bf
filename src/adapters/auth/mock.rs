//! Mock session validator for testing.
//!
//! # Example
//!
//! ```ignore
//! use lingua_relay::adapters::auth::MockSessionValidator;
//!
//! let validator = MockSessionValidator::new().with_test_caller("valid-token", "learner-1");
//!
//! let result = validator.validate(Some("valid-token")).await;
//! assert!(result.is_ok());
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, CallerId, CallerIdentity};
use crate::ports::SessionValidator;

/// Mock session validator for testing.
///
/// Stores a map of tokens to callers. A missing token returns `MissingToken`,
/// unknown tokens return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockSessionValidator {
    /// Map of valid tokens to their associated callers
    tokens: RwLock<HashMap<String, CallerIdentity>>,
    /// Optional error to return for all validations (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockSessionValidator {
    /// Creates a new empty mock validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a caller.
    pub fn with_caller(self, token: impl Into<String>, caller: CallerIdentity) -> Self {
        self.tokens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(token.into(), caller);
        self
    }

    /// Adds a valid token for a caller with the given id.
    ///
    /// Blank ids are ignored.
    pub fn with_test_caller(self, token: impl Into<String>, caller_id: impl Into<String>) -> Self {
        match CallerId::new(caller_id) {
            Ok(id) => self.with_caller(token, CallerIdentity::new(id)),
            Err(_) => self,
        }
    }

    /// Forces all validations to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self
            .force_error
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }
}

#[async_trait]
impl SessionValidator for MockSessionValidator {
    async fn validate(&self, token: Option<&str>) -> Result<CallerIdentity, AuthError> {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            return Err(error);
        }

        let token = token.ok_or(AuthError::MissingToken)?;
        self.tokens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }
}
