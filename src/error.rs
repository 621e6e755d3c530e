// src/error.rs
use axum::{
    http::{HeaderValue, StatusCode, header::ACCESS_CONTROL_ALLOW_ORIGIN},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures surfaced to the HTTP caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = match self {
            AppError::InvalidJson(_) => (StatusCode::BAD_REQUEST, "Invalid JSON").into_response(),
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        };
        // Error responses carry the allow-origin header even without the CORS layer.
        response
            .headers_mut()
            .insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        response
    }
}

/// Failures talking to the generation service. Never reach the caller.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream returned status {0}")]
    Http(reqwest::StatusCode),

    #[error("malformed upstream response: {0}")]
    Format(#[from] serde_json::Error),

    #[error("upstream connection failed: {0}")]
    Connection(#[from] reqwest::Error),
}
