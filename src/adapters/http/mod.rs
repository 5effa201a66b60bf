//! HTTP adapters - REST API implementations.
//!
//! Each area has its own dto/handlers/routes module; `api_router` mounts
//! them under `/api` behind the auth middleware.

pub mod error;
pub mod health;
pub mod middleware;
pub mod speech;
pub mod tutor;

pub use error::{status_for, ErrorResponse};
pub use health::{health_routes, HealthState};
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use speech::{speech_routes, SpeechHandlers};
pub use tutor::{tutor_routes, TutorHandlers};

use axum::Router;

/// All `/api` routes, each request passing through the auth middleware.
pub fn api_router(tutor: TutorHandlers, speech: SpeechHandlers, auth: AuthState) -> Router {
    let api = tutor_routes(tutor)
        .merge(speech_routes(speech))
        .layer(axum::middleware::from_fn_with_state(auth, auth_middleware));

    Router::new().nest("/api", api)
}
