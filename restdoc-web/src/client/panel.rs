//! Spinner and response panel regions inside a client's content container.

use std::cell::RefCell;
use std::rc::Rc;

use restdoc_types::PanelState;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::dom::{create_html, query_html, set_display};

const CLOSE_ICON: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" fill="currentColor" class="bi bi-x" viewBox="0 0 16 16"><path d="M4.646 4.646a.5.5 0 0 1 .708 0L8 7.293l2.646-2.647a.5.5 0 0 1 .708.708L8.707 8l2.647 2.646a.5.5 0 0 1-.708.708L8 8.707l-2.646 2.647a.5.5 0 0 1-.708-.708L7.293 8 4.646 5.354a.5.5 0 0 1 0-.708z"/></svg>"#;

/// Marks a close button that already has a handler.
const CLOSE_WIRED_ATTR: &str = "data-close-wired";

/// Shared slot for the panel; the close button empties it.
pub type PanelSlot = Rc<RefCell<Option<ResponsePanel>>>;

/// Find `.spin-container` in `content`, creating it when missing.
pub fn ensure_spinner(document: &Document, content: &Element) -> Result<HtmlElement, JsValue> {
    if let Some(existing) = query_html(content, ".spin-container") {
        return Ok(existing);
    }
    let container = create_html(document, "div")?;
    container.class_list().add_1("spin-container")?;
    let spin = create_html(document, "div")?;
    spin.class_list().add_1("spin")?;
    container.append_child(&spin)?;
    content.append_child(&container)?;
    Ok(container)
}

#[derive(Clone)]
pub struct ResponsePanel {
    container: HtmlElement,
    body: HtmlElement,
}

impl ResponsePanel {
    /// The panel in `slot`, else the one already in `content`, else a new one.
    pub fn ensure(
        document: &Document,
        content: &Element,
        slot: &PanelSlot,
    ) -> Result<Self, JsValue> {
        // Closed through another client's handler: detached but still cached here.
        let cached = slot.borrow_mut().take().filter(|p| p.container.is_connected());
        if let Some(panel) = cached {
            *slot.borrow_mut() = Some(panel.clone());
            return Ok(panel);
        }

        let panel = match query_html(content, ".response-container") {
            Some(container) => Self::adopt(document, container, slot)?,
            None => Self::create(document, content, slot)?,
        };
        *slot.borrow_mut() = Some(panel.clone());
        Ok(panel)
    }

    fn adopt(
        document: &Document,
        container: HtmlElement,
        slot: &PanelSlot,
    ) -> Result<Self, JsValue> {
        let body = match query_html(&container, "pre") {
            Some(pre) => pre,
            None => {
                let pre = create_html(document, "pre")?;
                container.append_child(&pre)?;
                pre
            }
        };
        if let Some(close) = query_html(&container, "button.close") {
            if !close.has_attribute(CLOSE_WIRED_ATTR) {
                attach_close(&close, &container, slot)?;
            }
        }
        Ok(Self { container, body })
    }

    fn create(document: &Document, content: &Element, slot: &PanelSlot) -> Result<Self, JsValue> {
        let container = create_html(document, "div")?;
        container.class_list().add_2("response-container", "content-margin")?;

        let close = create_html(document, "button")?;
        close.class_list().add_1("close")?;
        close.set_attribute("title", "Close response")?;
        close.set_inner_html(CLOSE_ICON);
        attach_close(&close, &container, slot)?;
        container.append_child(&close)?;

        let heading = create_html(document, "h4")?;
        heading.set_inner_text("Response");
        container.append_child(&heading)?;

        let body = create_html(document, "pre")?;
        container.append_child(&body)?;
        content.append_child(&container)?;

        Ok(Self { container, body })
    }

    pub fn set_text(&self, text: &str) {
        self.body.set_inner_text(text);
    }

    /// Visibility and error styling for `state`.
    pub fn apply_state(&self, state: PanelState) -> Result<(), JsValue> {
        let classes = self.container.class_list();
        if state.is_error() {
            classes.add_1("error")?;
        } else {
            classes.remove_1("error")?;
        }
        let display = if state.panel_visible() { "block" } else { "none" };
        set_display(&self.container, Some(display));
        Ok(())
    }
}

fn attach_close(
    button: &HtmlElement,
    container: &HtmlElement,
    slot: &PanelSlot,
) -> Result<(), JsValue> {
    let container = container.clone();
    let slot = Rc::clone(slot);
    let on_click = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
        container.remove();
        slot.borrow_mut().take();
    }));
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    button.set_attribute(CLOSE_WIRED_ATTR, "true")?;
    Ok(())
}
