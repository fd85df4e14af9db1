//! Static greeting endpoint.

use axum::http::Method;
use axum::response::{IntoResponse, Response};

use crate::http::response::{GatewayError, HELLO_METHOD_NOT_ALLOWED};

/// Fixed greeting body.
pub const GREETING: &str = "Hello, world!";

/// `/hello`: GET only, fixed text.
pub async fn hello_handler(method: Method) -> Response {
    if method != Method::GET {
        return GatewayError::MethodNotAllowed(HELLO_METHOD_NOT_ALLOWED).into_response();
    }

    GREETING.into_response()
}
