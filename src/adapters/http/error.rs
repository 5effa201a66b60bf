//! Mapping of relay errors onto HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{ErrorCode, RelayError};

/// Body for failures that have no success shape to mirror.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            code: code.to_string(),
        }
    }
}

pub fn status_for(error: &RelayError) -> StatusCode {
    match error {
        RelayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        RelayError::NotConfigured { .. } => StatusCode::SERVICE_UNAVAILABLE,
        RelayError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        RelayError::Blocked { .. }
        | RelayError::Empty
        | RelayError::EchoedInput { .. }
        | RelayError::Provider(_) => StatusCode::BAD_GATEWAY,
    }
}

/// 400 `{"error": "Invalid JSON"}` for bodies that do not deserialize.
pub fn invalid_json(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "Rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(ErrorCode::InvalidJson, "Invalid JSON")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_errors_map_to_client_or_unavailable() {
        assert_eq!(
            status_for(&RelayError::invalid_input("Missing required field: word")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&RelayError::NotConfigured { service: "AI" }),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn collaborator_errors_map_to_gateway_statuses() {
        assert_eq!(
            status_for(&RelayError::RateLimited { service: "AI" }),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(status_for(&RelayError::Empty), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status_for(&RelayError::blocked("SAFETY")),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&RelayError::EchoedInput {
                preview: "B1".to_string()
            }),
            StatusCode::BAD_GATEWAY
        );
    }
}
