//! Client configuration embedded in the page.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings read from `<script type="application/json" id="restdoc-config">`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix the documented API lives under.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Pixels subtracted from the viewport height for an expanded section.
    #[serde(default = "default_collapsible_offset_px")]
    pub collapsible_offset_px: u32,
    /// One of error/warn/info/debug/trace.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Binding whose value is posted verbatim.
    #[serde(default = "default_raw_body_parameter")]
    pub raw_body_parameter: String,
    #[serde(default = "default_pretty_indent")]
    pub pretty_indent: usize,
}

fn default_api_base() -> String {
    "/api".to_string()
}

fn default_collapsible_offset_px() -> u32 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_raw_body_parameter() -> String {
    "body".to_string()
}

fn default_pretty_indent() -> usize {
    2
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            collapsible_offset_px: default_collapsible_offset_px(),
            log_level: default_log_level(),
            raw_body_parameter: default_raw_body_parameter(),
            pretty_indent: default_pretty_indent(),
        }
    }
}

impl ClientConfig {
    /// Parse and validate a config block.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| ConfigError::ParseError { message: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "error" | "warn" | "info" | "debug" | "trace"
        ) {
            return Err(ConfigError::ValidationError {
                field: "log_level".to_string(),
                message: format!("unknown level '{}'", self.log_level),
            });
        }
        if self.raw_body_parameter.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "raw_body_parameter".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.pretty_indent > 8 {
            return Err(ConfigError::ValidationError {
                field: "pretty_indent".to_string(),
                message: "must be at most 8".to_string(),
            });
        }
        Ok(())
    }

    /// Whether `url` points into the configured API prefix.
    pub fn is_api_url(&self, url: &str) -> bool {
        url.starts_with(&self.api_base)
    }
}
