//! Response construction and error mapping.
//!
//! # Responsibilities
//! - Map every handler failure to a status code and plain-text body
//! - Build the relayed success response from upstream bytes
//!
//! # Design Decisions
//! - Error bodies never carry internal details, only the upstream's own
//!   text on a non-2xx status
//! - Error responses are `text/plain` with `nosniff`
//! - The success body is the upstream's raw bytes, never a re-serialization

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::upstream::{PayloadError, UpstreamError};

/// Rejection text for a non-GET request to `/hello`.
pub const HELLO_METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Rejection text for a non-GET request to `/rockets`.
pub const ROCKETS_METHOD_NOT_ALLOWED: &str = "Method not allowed.";

/// Everything that can end a request early.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("method not allowed")]
    MethodNotAllowed(&'static str),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("upstream returned {status}")]
    UpstreamStatus { status: StatusCode, body: Bytes },

    #[error(transparent)]
    Payload(#[from] PayloadError),
}

impl GatewayError {
    /// Status code sent to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Plain-text body sent to the client.
    pub fn message(&self) -> String {
        match self {
            GatewayError::MethodNotAllowed(text) => (*text).to_string(),
            GatewayError::Upstream(UpstreamError::Read(_)) => {
                "Error reading API response.".to_string()
            }
            GatewayError::Upstream(_) => "Server error.".to_string(),
            GatewayError::UpstreamStatus { body, .. } => {
                format!("API error: {}", String::from_utf8_lossy(body))
            }
            GatewayError::Payload(PayloadError::Malformed(_)) => {
                "Error parsing API response".to_string()
            }
            GatewayError::Payload(_) => "Error formatting JSON.".to_string(),
        }
    }

    /// Emit the operator-facing log line for this failure.
    pub fn log(&self, request_id: &str) {
        match self {
            GatewayError::MethodNotAllowed(_) => {}
            GatewayError::UpstreamStatus { status, .. } => {
                tracing::warn!(request_id = %request_id, status = %status, "Upstream returned an error status");
            }
            GatewayError::Upstream(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Upstream error");
            }
            GatewayError::Payload(e) => {
                tracing::error!(request_id = %request_id, error = %e, "Invalid upstream payload");
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"))],
            self.message(),
        )
            .into_response()
    }
}

/// Relay an upstream status and raw body as JSON.
pub fn relay_json(status: StatusCode, body: Bytes) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn malformed() -> serde_json::Error {
        serde_json::from_slice::<serde_json::Value>(b"not-json").unwrap_err()
    }

    #[tokio::test]
    async fn method_rejection_is_405_with_route_text() {
        let response = GatewayError::MethodNotAllowed(ROCKETS_METHOD_NOT_ALLOWED).into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
        assert_eq!(body_text(response).await, "Method not allowed.");
    }

    #[tokio::test]
    async fn upstream_status_echoes_body() {
        let err = GatewayError::UpstreamStatus {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: Bytes::from_static(br#"{"error":"down"}"#),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_text(response).await, r#"API error: {"error":"down"}"#);
    }

    #[test]
    fn payload_errors_map_to_fixed_text() {
        let parse = GatewayError::from(PayloadError::Malformed(malformed()));
        assert_eq!(parse.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(parse.message(), "Error parsing API response");

        let format = GatewayError::from(PayloadError::Format(malformed()));
        assert_eq!(format.message(), "Error formatting JSON.");
    }

    #[tokio::test]
    async fn relay_keeps_status_and_bytes() {
        let response = relay_json(StatusCode::CREATED, Bytes::from_static(br#"{"a":1}"#));
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_text(response).await, r#"{"a":1}"#);
    }
}
