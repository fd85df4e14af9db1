//! Rocket data gateway library.
//!
//! Serves a static greeting on `/hello` and relays the upstream rocket list on
//! `/rockets`, validating that the upstream body is JSON before passing its raw
//! bytes through.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
