//! Small DOM helpers shared by the client and the bootstrap.

use restdoc_types::InitError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

pub fn window() -> Result<Window, InitError> {
    web_sys::window().ok_or(InitError::NoDocument)
}

pub fn document() -> Result<Document, InitError> {
    window()?.document().ok_or(InitError::NoDocument)
}

/// Best-effort text for a thrown JS value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", err)
}

pub fn dom_error(err: JsValue) -> InitError {
    InitError::Dom { message: js_error_message(&err) }
}

/// Every element in a `NodeList`, skipping text and comment nodes.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_html(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn create_html(document: &Document, tag: &str) -> Result<HtmlElement, JsValue> {
    document.create_element(tag)?.dyn_into::<HtmlElement>().map_err(JsValue::from)
}

/// Set `display`, or clear it back to the stylesheet value with `None`.
pub fn set_display(el: &HtmlElement, value: Option<&str>) {
    let style = el.style();
    let result = match value {
        Some(value) => style.set_property("display", value),
        None => style.remove_property("display").map(drop),
    };
    if let Err(e) = result {
        log::warn!("Failed to set display: {}", js_error_message(&e));
    }
}
