//! Typed error definitions for restdoc.
//!
//! One enum per failure domain. `RestdocError` is what crosses into
//! JavaScript when something is thrown synchronously.

mod config;
mod init;
mod request;

pub use config::ConfigError;
pub use init::InitError;
pub use request::RequestError;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Any restdoc failure, tagged by the domain it came from.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "domain", content = "error")]
pub enum RestdocError {
    #[error("{0}")]
    Init(#[from] InitError),

    #[error("{0}")]
    Request(#[from] RequestError),

    #[error("{0}")]
    Config(#[from] ConfigError),
}

impl RestdocError {
    /// Payload thrown to JS: the tagged error plus its display `message`.
    pub fn to_js_payload(&self) -> Value {
        let mut payload = serde_json::to_value(self).unwrap_or(Value::Null);
        if let Value::Object(map) = &mut payload {
            map.insert("message".to_string(), Value::String(self.to_string()));
        }
        payload
    }
}
