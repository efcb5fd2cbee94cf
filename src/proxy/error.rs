//! Failure taxonomy and client-facing error responses.
//!
//! Failures are tagged at the point they occur (resolver, forwarder) so
//! classification never has to inspect error message strings. Converting a
//! `ProxyError` into a response is the error classifier: first variant match
//! wins, every classified error is logged with enough context to diagnose.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;
use thiserror::Error;

/// Errors that can occur while proxying a request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The target-indicator query parameter was missing or empty.
    /// Carries the caller's path so the usage hint can echo it back.
    #[error("Missing required parameter: {param}")]
    MissingTargetIndicator { param: String, path: String },

    /// The upstream call failed at the transport layer (DNS, connect,
    /// TLS, timeout).
    #[error("Failed to fetch upstream server: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Anything not covered by the variants above; converted to a 500 at
    /// the dispatcher boundary.
    #[error("{0}")]
    Unclassified(String),
}

/// Result type for pipeline stages.
pub type ProxyResult<T> = Result<T, ProxyError>;

impl ProxyError {
    /// Status code this failure is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::MissingTargetIndicator { .. } => StatusCode::BAD_REQUEST,
            ProxyError::Transport { .. } => StatusCode::BAD_GATEWAY,
            ProxyError::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let timestamp = Utc::now().to_rfc3339();
        match self {
            ProxyError::MissingTargetIndicator { param, path } => {
                tracing::warn!(path = %path, param = %param, "Request rejected: no target indicator");
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "error": format!("Missing required parameter: {param}"),
                        "usage": format!("Add ?{param}=example.com to your request"),
                        "example": format!("{path}?{param}=example.com"),
                        "timestamp": timestamp,
                    })),
                )
                    .into_response()
            }
            ProxyError::Transport { url, source } => {
                tracing::error!(url = %url, error = %source, "Upstream fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({
                        "error": "Failed to fetch upstream server",
                        "details": source.to_string(),
                        "timestamp": timestamp,
                    })),
                )
                    .into_response()
            }
            ProxyError::Unclassified(message) => {
                tracing::error!(error = %message, "Unclassified proxy error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": message,
                        "timestamp": timestamp,
                    })),
                )
                    .into_response()
            }
        }
    }
}
