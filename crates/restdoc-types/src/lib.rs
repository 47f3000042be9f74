//! # restdoc Types
//!
//! Pure data transformations behind the restdoc API console.
//!
//! Everything in this crate is free of DOM access so it compiles and tests
//! natively:
//!
//! - **`error`** - Typed error hierarchy for initialization, requests and configuration
//! - **`models`** - Route templates, parameter bindings, response classification,
//!   the list cache, panel state machine, collapsible layout and client config
//!
//! ## Architecture Role
//!
//! ```text
//!     restdoc-types (this crate)
//!             │
//!             ▼
//!       restdoc-web (wasm, DOM side effects)
//! ```

pub mod error;
pub mod models;

// Re-export error types for convenience
pub use error::{ConfigError, InitError, RequestError, RestdocError};

// Re-export core model types
pub use models::{
    build_request_body, classify_response, expanded_max_height, extract_list, render_pretty,
    resolve_url, toggle_max_height, viewport_height, ClientConfig, ListCategory, ModalAction,
    PanelEvent, PanelState, PanelTracker, ParameterBinding, RequestPlan, RequestTicket,
    ResponseCache, ResponseValue, NO_CONTENT,
};
