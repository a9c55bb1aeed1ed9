use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::backend_client::BackendError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The parsing and formatting core never produces these; they come from
/// request validation and from the backend round-trip.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Backend not configured")]
    BackendUnavailable,

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::BackendUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "BACKEND_UNAVAILABLE",
                "No backend is configured; set BACKEND_URL".to_string(),
            ),
            AppError::Backend(e) => {
                tracing::error!("Backend error: {e}");
                let message = match e {
                    BackendError::Api { status, message } => {
                        format!("Backend rejected the request ({status}): {message}")
                    }
                    _ => "The backend could not be reached".to_string(),
                };
                (StatusCode::BAD_GATEWAY, "BACKEND_ERROR", message)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let response = AppError::Validation("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_backend_unavailable_maps_to_503() {
        let response = AppError::BackendUnavailable.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_backend_api_error_maps_to_bad_gateway() {
        let err = AppError::from(BackendError::Api {
            status: 401,
            message: "Could not validate credentials".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
