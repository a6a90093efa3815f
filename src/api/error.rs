//! API error type.
//!
//! Every failure leaves the service as the response envelope with
//! `success: false`, whatever the status code, because clients decode
//! the envelope before they look at the status. Scoring errors carry
//! their detail through verbatim; internal errors do not.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::config;
use crate::scoring::ScoringError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Chat backend not configured")]
    NotConfigured,

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failure half of the response envelope.
#[derive(Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!(
                    "Chat backend not configured. Set {} in the environment",
                    config::GROQ_API_KEY_ENV
                ),
            ),
            ApiError::Scoring(error) => {
                tracing::error!("Scoring failed: {error}");
                (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
            }
            ApiError::Internal(detail) => {
                tracing::error!("Internal API error: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn bad_request_maps_to_envelope() {
        let response = ApiError::BadRequest("Patient data required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Patient data required");
    }

    #[tokio::test]
    async fn missing_backend_names_the_env_var() {
        let response = ApiError::NotConfigured.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("GROQ_API_KEY"));
    }

    #[tokio::test]
    async fn scoring_failure_keeps_its_detail() {
        let error = ApiError::from(ScoringError::InvalidJson("expected value at line 1".into()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON response from AI:"));
    }

    #[tokio::test]
    async fn internal_failure_hides_its_detail() {
        let response = ApiError::Internal("join error".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "An internal error occurred");
    }
}
