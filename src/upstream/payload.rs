//! JSON well-formedness check and diagnostic pretty printing.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while inspecting an upstream payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The body is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The parsed value could not be re-serialized.
    #[error("failed to format JSON: {0}")]
    Format(#[source] serde_json::Error),
}

/// Parse `raw` as JSON and render it indented with one tab per level.
///
/// Only the rendered text is produced; callers relay `raw` untouched.
pub fn pretty_print(raw: &[u8]) -> Result<String, PayloadError> {
    let value: Value = serde_json::from_slice(raw).map_err(PayloadError::Malformed)?;

    let mut out = Vec::with_capacity(raw.len() * 2);
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    value
        .serialize(&mut serializer)
        .map_err(PayloadError::Format)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}
