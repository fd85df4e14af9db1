//! Rockets relay endpoint.
//!
//! # Flow
//! ```text
//! method check → upstream GET → full body read → status check
//!     → JSON parse → tab-indented log copy → relay raw bytes
//! ```
//!
//! Every failure ends the request with a plain-text 500 (405 for the
//! method check). Nothing is retried.

use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::{IntoResponse, Response};

use crate::http::request::request_id;
use crate::http::response::{relay_json, GatewayError, ROCKETS_METHOD_NOT_ALLOWED};
use crate::http::server::AppState;
use crate::upstream::{pretty_print, UpstreamClient};

/// `/rockets`: relay the upstream rocket list.
pub async fn rockets_handler(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    if method != Method::GET {
        return GatewayError::MethodNotAllowed(ROCKETS_METHOD_NOT_ALLOWED).into_response();
    }

    let request_id = request_id(&headers);
    match relay(&state.upstream, request_id).await {
        Ok(response) => response,
        Err(e) => {
            e.log(request_id);
            e.into_response()
        }
    }
}

async fn relay(upstream: &UpstreamClient, request_id: &str) -> Result<Response, GatewayError> {
    tracing::debug!(request_id = %request_id, url = %upstream.url(), "Fetching upstream");

    let response = upstream.fetch().await?;
    tracing::info!(
        request_id = %request_id,
        status = response.status.as_u16(),
        "API response status code"
    );

    if response.status.as_u16() > 299 {
        return Err(GatewayError::UpstreamStatus {
            status: response.status,
            body: response.body,
        });
    }

    let pretty = pretty_print(&response.body)?;
    tracing::info!(request_id = %request_id, "API response body:\n{}", pretty);

    Ok(relay_json(response.status, response.body))
}
