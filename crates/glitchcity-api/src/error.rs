//! Glitch City — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use glitchcity_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// The narrative relay client could not be built.
    #[error("http client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            DomainError::SessionOver => (StatusCode::CONFLICT, "session_over"),
            DomainError::SystemCritical => (StatusCode::LOCKED, "system_critical"),
            DomainError::TransitionInProgress => (StatusCode::CONFLICT, "transition_in_progress"),
            DomainError::NarrativeUnavailable(_) => (StatusCode::BAD_GATEWAY, "narrative_unavailable"),
            DomainError::Infrastructure(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
            }
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn status_of(err: DomainError) -> StatusCode {
        let response = ApiError(err).into_response();
        response.status()
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_session_over_maps_to_409() {
        assert_eq!(status_of(DomainError::SessionOver), StatusCode::CONFLICT);
    }

    #[test]
    fn test_system_critical_maps_to_423() {
        assert_eq!(status_of(DomainError::SystemCritical), StatusCode::LOCKED);
    }

    #[test]
    fn test_transition_in_progress_maps_to_409() {
        assert_eq!(
            status_of(DomainError::TransitionInProgress),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_narrative_unavailable_maps_to_502() {
        assert_eq!(
            status_of(DomainError::NarrativeUnavailable("timeout".into())),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_infrastructure_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Infrastructure("disk full".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
