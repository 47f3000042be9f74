//! Reading parameter bindings and turning text inputs into dropdowns.

use restdoc_types::{ParameterBinding, ResponseCache};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement, HtmlTextAreaElement,
};

use crate::dom::{elements, js_error_message};

/// Binding for one `.request-parameter` control, if it is a form control.
fn parameter_binding(element: &Element) -> Option<ParameterBinding> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(ParameterBinding::new(input.name(), input.value()));
    }
    if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        return Some(ParameterBinding::new(select.name(), select.value()));
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return Some(ParameterBinding::new(area.name(), area.value()));
    }
    None
}

/// Current bindings under `root`, in document order.
pub fn collect_bindings(root: &Element) -> Vec<ParameterBinding> {
    match root.query_selector_all(".request-parameter") {
        Ok(list) => elements(&list).iter().filter_map(parameter_binding).collect(),
        Err(e) => {
            log::warn!("Failed to query request parameters: {}", js_error_message(&e));
            Vec::new()
        }
    }
}

/// Swap `input` for a `select` with the same name offering `options`.
pub fn replace_input_with_select(
    document: &Document,
    input: &HtmlInputElement,
    options: &[String],
) -> Result<(), JsValue> {
    let select: HtmlSelectElement = document.create_element("select")?.dyn_into()?;
    select.set_name(&input.name());
    select.class_list().add_1("request-parameter")?;
    for option in options {
        let element = HtmlOptionElement::new_with_text_and_value(option, option)?;
        select.append_child(&element)?;
    }
    input.replace_with_with_node_1(&select)
}

/// Replace every plain text input fed by a populated cache list, page-wide.
/// Returns how many inputs were replaced.
pub fn update_input_fields(document: &Document, cache: &ResponseCache) -> usize {
    let mut replaced = 0;
    for (category, options) in cache.populated() {
        let list = match document.query_selector_all(&category.input_selector()) {
            Ok(list) => list,
            Err(e) => {
                log::warn!(
                    "Failed to query {} inputs: {}",
                    category.input_name(),
                    js_error_message(&e)
                );
                continue;
            }
        };

        for element in elements(&list) {
            let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
                continue;
            };
            if input.type_() != "text" {
                continue;
            }
            match replace_input_with_select(document, &input, options) {
                Ok(()) => replaced += 1,
                Err(e) => log::warn!(
                    "Failed to replace {} input: {}",
                    category.input_name(),
                    js_error_message(&e)
                ),
            }
        }
    }
    replaced
}
