//! restdoc - in-page request console for static API documentation
//!
//! Loaded as a wasm module by the documentation page. On start it wires the
//! collapsible sections and modals; buttons then drive requests through
//! `new RequestClient(this).runRequest(method, url)`.

pub mod api;
pub mod bootstrap;
pub mod client;
pub mod config;
pub mod dom;

use wasm_bindgen::prelude::*;

pub use bootstrap::UiBootstrap;
pub use client::{resolve_url_js, RequestClient};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    let window = dom::window().map_err(client::to_js_error)?;
    let document = dom::document().map_err(client::to_js_error)?;
    let loaded = config::load(&document);
    let config = loaded.clone().unwrap_or_default();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(config::log_level(&config)));

    log::info!("restdoc {} starting...", env!("RESTDOC_BUILD_VERSION"));
    if let Err(e) = loaded {
        log::warn!("Ignoring #{}: {}", config::CONFIG_ELEMENT_ID, e);
    }

    config::install(config.clone());
    UiBootstrap::install(window, document, &config)?;
    log::debug!("Page bootstrap ready");
    Ok(())
}
