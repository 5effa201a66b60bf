//! Caller resolution for every `/api` route.
//!
//! `auth_middleware` hands the optional bearer token to the configured
//! `SessionValidator` and stores the resulting `CallerIdentity` in request
//! extensions. Handlers pick it up with `RequireAuth`. With verification
//! disabled every request resolves to the same placeholder caller.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, CallerIdentity, ErrorCode};
use crate::ports::SessionValidator;

pub type AuthState = Arc<dyn SessionValidator>;

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
fn bearer_token(header: &str) -> Option<&str> {
    header.strip_prefix("Bearer ").map(str::trim)
}

/// Authentication middleware.
///
/// The bearer token, if any, is handed to the `SessionValidator`; whether a
/// missing token is acceptable is the validator's call. On success the
/// `CallerIdentity` is injected into request extensions. Failures return 401,
/// or 503 when the validator itself is unavailable.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned);

    match validator.validate(token.as_deref()).await {
        Ok(caller) => {
            request.extensions_mut().insert(caller);
            next.run(request).await
        }
        Err(e) => {
            let (status, code, message) = match &e {
                AuthError::MissingToken => (
                    StatusCode::UNAUTHORIZED,
                    ErrorCode::Unauthorized,
                    "Authentication required",
                ),
                AuthError::InvalidToken => (
                    StatusCode::UNAUTHORIZED,
                    ErrorCode::Unauthorized,
                    "Invalid token",
                ),
                AuthError::ServiceUnavailable(msg) => {
                    tracing::error!("Auth service unavailable: {}", msg);
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        ErrorCode::AuthUnavailable,
                        "Authentication service unavailable",
                    )
                }
            };

            (status, Json(ErrorResponse::new(code, message))).into_response()
        }
    }
}

/// The caller resolved by `auth_middleware`. Rejects with 401 when the
/// middleware was not layered onto the route.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub CallerIdentity);

impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut axum::http::request::Parts,
        _state: &'life1 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            parts
                .extensions
                .get::<CallerIdentity>()
                .cloned()
                .map(RequireAuth)
                .ok_or(AuthRejection::Unauthenticated)
        })
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No caller was resolved for this request.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(
                    ErrorCode::Unauthorized,
                    "Authentication required",
                )),
            )
                .into_response(),
        }
    }
}
