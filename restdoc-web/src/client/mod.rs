//! Request console bound to one documented endpoint.
//!
//! A `RequestClient` is built from the clicked button. Its content container
//! (the button's grandparent) holds the `.request-parameter` inputs, the
//! spinner and the response panel.

mod inputs;
mod panel;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use js_sys::Promise;
use restdoc_types::{
    render_pretty, ClientConfig, InitError, PanelEvent, PanelState, PanelTracker,
    ParameterBinding, RequestError, RequestPlan, RequestTicket, ResponseCache, ResponseValue,
    RestdocError,
};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};
use web_sys::{AbortController, AbortSignal, Document, Element, HtmlElement};

use crate::dom::{dom_error, js_error_message, set_display};
use crate::{api, config};

pub use inputs::{collect_bindings, replace_input_with_select, update_input_fields};
pub use panel::{ensure_spinner, PanelSlot, ResponsePanel};

fn to_js(value: &Value) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

/// Convert a failure into the object thrown to JS.
pub fn to_js_error(err: impl Into<RestdocError>) -> JsValue {
    let err = err.into();
    to_js(&err.to_js_payload()).unwrap_or_else(|_| JsValue::from_str(&err.to_string()))
}

struct ClientInner {
    document: Document,
    content: Element,
    spinner: HtmlElement,
    panel: PanelSlot,
    cache: RefCell<ResponseCache>,
    tracker: RefCell<PanelTracker>,
    in_flight: RefCell<Option<AbortController>>,
    config: ClientConfig,
}

impl ClientInner {
    fn plan(&self, method: &str, template: &str) -> RequestPlan {
        let bindings = collect_bindings(&self.content);
        let plan = RequestPlan::new(method, template, &bindings, &self.config.raw_body_parameter);
        if !self.config.is_api_url(&plan.url) {
            log::debug!("{} is outside {}", plan.url, self.config.api_base);
        }
        plan
    }

    fn panel(&self) -> Option<ResponsePanel> {
        ResponsePanel::ensure(&self.document, &self.content, &self.panel)
            .map_err(|e| log::error!("Response panel unavailable: {}", js_error_message(&e)))
            .ok()
    }

    /// Spinner, panel visibility and error class all follow `state`.
    fn render(&self, state: PanelState, text: &str) {
        set_display(&self.spinner, state.spinner_visible().then_some("block"));
        if let Some(panel) = self.panel() {
            panel.set_text(text);
            if let Err(e) = panel.apply_state(state) {
                log::error!("Failed to style response panel: {}", js_error_message(&e));
            }
        }
    }

    /// idle → loading. Aborts whatever this client still has in flight.
    fn begin(&self) -> (RequestTicket, Option<AbortSignal>) {
        if let Some(previous) = self.in_flight.borrow_mut().take() {
            log::debug!("Aborting superseded request");
            previous.abort();
        }

        let controller = AbortController::new()
            .map_err(|e| log::warn!("AbortController unavailable: {}", js_error_message(&e)))
            .ok();
        let signal = controller.as_ref().map(AbortController::signal);
        *self.in_flight.borrow_mut() = controller;

        let ticket = self.tracker.borrow_mut().start();
        self.render(PanelState::Loading, "");
        (ticket, signal)
    }

    /// loading → success | error, unless a newer invocation took over.
    fn finish(
        &self,
        ticket: RequestTicket,
        plan: &RequestPlan,
        result: Result<ResponseValue, RequestError>,
    ) {
        let event = if result.is_ok() { PanelEvent::Succeeded } else { PanelEvent::Failed };
        let Some(state) = self.tracker.borrow_mut().complete(ticket, event) else {
            log::debug!("Discarding result of superseded request to {}", plan.url);
            return;
        };
        self.in_flight.borrow_mut().take();

        let text = match &result {
            Ok(value) => render_pretty(&value.to_json(), self.config.pretty_indent),
            Err(err) => {
                log::warn!("Request to {} failed: {}", plan.url, err);
                render_pretty(&err.to_panel_json(), self.config.pretty_indent)
            }
        };
        self.render(state, &text);

        if let Ok(value) = result {
            let Some(category) = plan.list_category() else {
                return;
            };
            if self.cache.borrow_mut().store(category, &value.to_json()) {
                log::debug!("Cached {:?} list from {}", category, plan.url);
            }
            let replaced = update_input_fields(&self.document, &self.cache.borrow());
            if replaced > 0 {
                log::info!("Replaced {} text inputs with dropdowns", replaced);
            }
        }
    }
}

#[wasm_bindgen]
pub struct RequestClient {
    inner: Rc<ClientInner>,
}

#[wasm_bindgen]
impl RequestClient {
    /// Bind to the container around `element`. Throws if it is not attached
    /// at least two levels deep.
    #[wasm_bindgen(constructor)]
    pub fn new(element: Option<Element>) -> Result<RequestClient, JsValue> {
        Self::bind(element).map_err(to_js_error)
    }

    /// Fire the request and drive the spinner and response panel.
    #[wasm_bindgen(js_name = runRequest)]
    pub fn run_request(&self, method: &str, url: &str) {
        let inner = Rc::clone(&self.inner);
        let plan = inner.plan(method, url);
        let (ticket, signal) = inner.begin();

        spawn_local(async move {
            let result = api::send(&plan, signal.as_ref()).await;
            if matches!(result, Err(RequestError::Aborted)) {
                log::debug!("Request to {} aborted", plan.url);
                return;
            }
            inner.finish(ticket, &plan, result);
        });
    }

    /// Issue one request without touching the page. Resolves with the parsed
    /// body (or `"No Content"`), rejects with the error object.
    #[wasm_bindgen(js_name = sendRequest)]
    pub fn send_request(&self, method: &str, url: &str) -> Promise {
        let plan = self.inner.plan(method, url);
        future_to_promise(async move {
            match api::send(&plan, None).await {
                Ok(value) => to_js(&value.to_json()),
                Err(err) => Err(to_js(&err.to_panel_json()).unwrap_or_else(|e| e)),
            }
        })
    }

    /// Current state of the response panel: idle, loading, success or error.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        format!("{:?}", self.inner.tracker.borrow().state()).to_lowercase()
    }
}

impl RequestClient {
    pub fn bind(element: Option<Element>) -> Result<Self, InitError> {
        let element = element.ok_or(InitError::MissingElement)?;
        let parent = element.parent_element().ok_or(InitError::MissingParent)?;
        let content = parent.parent_element().ok_or(InitError::MissingGrandparent)?;

        let document = crate::dom::document()?;
        let config = config::current(&document);
        let spinner = ensure_spinner(&document, &content).map_err(dom_error)?;

        let panel: PanelSlot = Rc::new(RefCell::new(None));
        ResponsePanel::ensure(&document, &content, &panel).map_err(dom_error)?;

        Ok(Self {
            inner: Rc::new(ClientInner {
                document,
                content,
                spinner,
                panel,
                cache: RefCell::new(ResponseCache::default()),
                tracker: RefCell::new(PanelTracker::default()),
                in_flight: RefCell::new(None),
                config,
            }),
        })
    }
}

/// Resolve `{name}` placeholders against a `{ name: value }` object.
#[wasm_bindgen(js_name = resolveUrl)]
pub fn resolve_url_js(template: &str, bindings: JsValue) -> Result<String, JsValue> {
    let map: BTreeMap<String, String> = serde_wasm_bindgen::from_value(bindings)?;
    let bindings: Vec<ParameterBinding> =
        map.into_iter().map(|(name, value)| ParameterBinding::new(name, value)).collect();
    Ok(restdoc_types::resolve_url(template, &bindings))
}
