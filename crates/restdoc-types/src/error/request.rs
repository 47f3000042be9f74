//! Request and response errors.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Message attached to statuses outside the handled set.
pub const UNEXPECTED_STATUS_MSG: &str = "Something else other than 200 was returned";

/// Errors that end a request in the error state.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum RequestError {
    /// 400 with the server's raw response text
    #[error("Bad Request: {error}")]
    BadRequest { error: String },

    /// 404
    #[error("Not Found")]
    NotFound,

    /// Any status other than 200, 204, 400 and 404
    #[error("HTTP {status}: {msg}")]
    UnexpectedStatus { status: u16, msg: String },

    /// The request never produced a response (network down, CORS, bad URL)
    #[error("Transport error: {message}")]
    Transport { message: String },

    /// A 200 response whose body is not JSON
    #[error("Invalid JSON in response: {message}")]
    InvalidJson { message: String },

    /// Superseded by a newer request on the same client
    #[error("Request aborted")]
    Aborted,
}

impl RequestError {
    /// Build the error for a status code outside the handled set.
    pub fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus { status, msg: UNEXPECTED_STATUS_MSG.to_string() }
    }

    /// The object shown in the response panel and handed to JS rejections.
    pub fn to_panel_json(&self) -> Value {
        match self {
            Self::BadRequest { error } => json!({ "status": "Bad Request", "error": error }),
            Self::NotFound => json!({ "status": "Not Found" }),
            Self::UnexpectedStatus { status, msg } => json!({ "status": status, "msg": msg }),
            Self::Transport { message } => json!({ "status": "Transport Error", "msg": message }),
            Self::InvalidJson { message } => json!({ "status": "Invalid JSON", "msg": message }),
            Self::Aborted => json!({ "status": "Aborted" }),
        }
    }
}
