//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned / propagated)
//!     → route table: /hello → hello.rs, /rockets → rockets.rs
//!     → response.rs (relay or map error to status + text)
//!     → Send to client
//! ```

pub mod hello;
pub mod request;
pub mod response;
pub mod rockets;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::GatewayError;
pub use server::{build_router, AppState, HttpServer};
