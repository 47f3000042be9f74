//! Reads `ClientConfig` from the page.

use std::cell::OnceCell;
use std::str::FromStr;

use restdoc_types::{ClientConfig, ConfigError};
use web_sys::Document;

/// Id of the `<script type="application/json">` block holding the config.
pub const CONFIG_ELEMENT_ID: &str = "restdoc-config";

/// Parse the page config. A missing or blank block means defaults.
pub fn load(document: &Document) -> Result<ClientConfig, ConfigError> {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(ClientConfig::default());
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(ClientConfig::default());
    }
    ClientConfig::from_json_str(&raw)
}

thread_local! {
    static PAGE_CONFIG: OnceCell<ClientConfig> = const { OnceCell::new() };
}

/// Keep the config `start` loaded for every client on the page.
pub fn install(config: ClientConfig) {
    PAGE_CONFIG.with(|cell| {
        if cell.set(config).is_err() {
            log::debug!("Page config already installed");
        }
    });
}

/// The page config, loaded on first use when `start` has not installed it.
pub fn current(document: &Document) -> ClientConfig {
    PAGE_CONFIG.with(|cell| cell.get_or_init(|| load_or_default(document)).clone())
}

pub fn load_or_default(document: &Document) -> ClientConfig {
    load(document).unwrap_or_else(|e| {
        log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
        ClientConfig::default()
    })
}

pub fn log_level(config: &ClientConfig) -> log::Level {
    log::Level::from_str(&config.log_level).unwrap_or(log::Level::Info)
}
