//! HTTP middleware for axum.
//!
//! - `auth` - Caller resolution middleware and extractor

pub mod auth;

pub use auth::{auth_middleware, AuthRejection, AuthState, RequireAuth};
