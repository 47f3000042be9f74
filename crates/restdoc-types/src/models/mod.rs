//! Core models for the restdoc console.
//!
//! Everything here is a pure transformation; DOM effects live in `restdoc-web`.

mod binding;
mod cache;
mod config;
mod layout;
mod modal;
mod panel;
mod response;
mod route;

pub use binding::{build_request_body, ParameterBinding, RequestPlan};
pub use cache::{extract_list, ListCategory, ResponseCache};
pub use config::ClientConfig;
pub use layout::{expanded_max_height, toggle_max_height, viewport_height};
pub use modal::ModalAction;
pub use panel::{PanelEvent, PanelState, PanelTracker, RequestTicket};
pub use response::{classify_response, render_pretty, ResponseValue, NO_CONTENT};
pub use route::resolve_url;
