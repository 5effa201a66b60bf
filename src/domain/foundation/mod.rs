//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, caller identity and the error taxonomy
//! shared by every relay call.

mod auth;
mod errors;
mod ids;

pub use auth::{AuthError, CallerIdentity};
pub use errors::{ErrorCode, RelayError, ValidationError};
pub use ids::{CallerId, RequestId};
