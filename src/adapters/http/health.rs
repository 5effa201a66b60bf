//! Liveness probe.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

/// Which collaborators have credentials. Fixed at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthState {
    pub ai_configured: bool,
    pub speech_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ai: &'static str,
    pub speech: &'static str,
}

fn configured(flag: bool) -> &'static str {
    if flag {
        "configured"
    } else {
        "not_configured"
    }
}

/// GET /health
pub async fn health_check(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        ai: configured(state.ai_configured),
        speech: configured(state.speech_configured),
    })
}

pub fn health_routes(state: HealthState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_missing_credentials() {
        let Json(body) = health_check(State(HealthState {
            ai_configured: true,
            speech_configured: false,
        }))
        .await;

        assert_eq!(body.status, "ok");
        assert_eq!(body.ai, "configured");
        assert_eq!(body.speech, "not_configured");
    }
}
