//! Error types for the restaurant search service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == App Error Enum ==
/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum AppError {
    /// The Places API failed or answered with something unusable
    #[error("Places API unavailable: {0}")]
    RemoteUnavailable(String),

    /// No place exists for the requested identifier
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::RemoteUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key
        let err = err.without_url();
        if err.is_decode() {
            AppError::RemoteUnavailable(format!("malformed response: {}", err))
        } else {
            AppError::RemoteUnavailable(err.to_string())
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            AppError::RemoteUnavailable(_) => self.to_string(),
            AppError::NotFound(_) => "Restaurant not found".to_string(),
            AppError::InvalidRequest(msg) => msg.clone(),
            AppError::Internal(msg) => msg.clone(),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the service.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::RemoteUnavailable("quota".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::NotFound("abc".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidRequest("empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_display() {
        let err = AppError::RemoteUnavailable("OVER_QUERY_LIMIT".into());
        assert_eq!(err.to_string(), "Places API unavailable: OVER_QUERY_LIMIT");
    }

    #[tokio::test]
    async fn test_remote_unavailable_body_is_neutral() {
        let response = AppError::RemoteUnavailable("HTTP 503".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "Places API unavailable: HTTP 503");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::InvalidRequest("Query cannot be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
