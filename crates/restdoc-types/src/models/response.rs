//! HTTP status classification and response rendering.

use serde::ser::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::error::RequestError;

/// Marker a 204 resolves with.
pub const NO_CONTENT: &str = "No Content";

/// A successful outcome of `sendRequest`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseValue {
    /// Parsed 200 body
    Json(Value),
    /// 204
    NoContent,
}

impl ResponseValue {
    /// The value as JS sees it: the parsed body, or the `"No Content"` string.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::NoContent => Value::String(NO_CONTENT.to_string()),
        }
    }
}

/// Map a finished response onto the handled status set.
pub fn classify_response(status: u16, body: &str) -> Result<ResponseValue, RequestError> {
    match status {
        200 => serde_json::from_str(body)
            .map(ResponseValue::Json)
            .map_err(|e| RequestError::InvalidJson { message: e.to_string() }),
        204 => Ok(ResponseValue::NoContent),
        400 => Err(RequestError::BadRequest { error: body.to_string() }),
        404 => Err(RequestError::NotFound),
        other => Err(RequestError::unexpected_status(other)),
    }
}

/// Pretty-print a value for the response panel with `indent` spaces per level.
pub fn render_pretty(value: &Value, indent: usize) -> String {
    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}
