//! Page-wide behaviours: collapsible sections and modal dialogs.

use std::rc::Rc;

use restdoc_types::{toggle_max_height, viewport_height, ClientConfig, ModalAction};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent, Window};

use crate::dom::{elements, js_error_message};

/// Built once per page load; the event handlers share it.
pub struct UiBootstrap {
    window: Window,
    document: Document,
    collapsible_offset_px: u32,
}

impl UiBootstrap {
    /// Attach every collapsible and modal handler on the page.
    pub fn install(
        window: Window,
        document: Document,
        config: &ClientConfig,
    ) -> Result<Rc<Self>, JsValue> {
        let this = Rc::new(Self {
            window,
            document,
            collapsible_offset_px: config.collapsible_offset_px,
        });

        let collapsibles = this.wire_collapsibles()?;
        let modal_controls = this.wire_modal_controls()?;
        this.wire_escape()?;

        log::debug!("Wired {} collapsibles and {} modal controls", collapsibles, modal_controls);
        Ok(this)
    }

    fn viewport(&self) -> f64 {
        let client = self
            .document
            .document_element()
            .map_or(0.0, |root| f64::from(root.client_height()));
        let inner = self.window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        viewport_height(client, inner)
    }

    /// Flip `active` on `header` and expand or collapse the block after it.
    pub fn toggle_collapsible(&self, header: &Element) -> Result<(), JsValue> {
        header.class_list().toggle("active")?;

        let Some(content) = header
            .next_element_sibling()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return Ok(());
        };

        let style = content.style();
        let current = style.get_property_value("max-height")?;
        match toggle_max_height(&current, self.viewport(), self.collapsible_offset_px) {
            Some(height) => style.set_property("max-height", &height),
            None => style.remove_property("max-height").map(drop),
        }
    }

    pub fn open_modal(&self, id: &str) -> Result<(), JsValue> {
        match self.document.get_element_by_id(id) {
            Some(modal) if modal.class_list().contains("modal") => {
                modal.class_list().add_1("open")?;
                modal.set_attribute("aria-hidden", "false")
            }
            _ => {
                log::warn!("No .modal with id '{}'", id);
                Ok(())
            }
        }
    }

    pub fn close_modal(&self, modal: &Element) -> Result<(), JsValue> {
        modal.class_list().remove_1("open")?;
        modal.set_attribute("aria-hidden", "true")
    }

    fn run_modal_action(&self, control: &Element, action: &ModalAction) -> Result<(), JsValue> {
        match action {
            ModalAction::Open(id) => self.open_modal(id),
            ModalAction::CloseEnclosing => match control.closest(".modal")? {
                Some(modal) => self.close_modal(&modal),
                None => Ok(()),
            },
        }
    }

    fn wire_collapsibles(self: &Rc<Self>) -> Result<usize, JsValue> {
        let headers = self.document.get_elements_by_class_name("collapsible");
        let mut wired = 0;
        for header in (0..headers.length()).filter_map(|i| headers.item(i)) {
            let this = Rc::clone(self);
            let target = header.clone();
            let on_click = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
                if let Err(e) = this.toggle_collapsible(&target) {
                    log::warn!("Collapsible toggle failed: {}", js_error_message(&e));
                }
            }));
            header.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
            wired += 1;
        }
        Ok(wired)
    }

    fn wire_modal_controls(self: &Rc<Self>) -> Result<usize, JsValue> {
        let controls = self.document.query_selector_all("[data-open-modal], [data-close-modal]")?;
        let mut wired = 0;
        for control in elements(&controls) {
            let open = control.get_attribute("data-open-modal");
            let close = control.get_attribute("data-close-modal");
            let action = ModalAction::from_attributes(open.as_deref(), close.as_deref());
            let Some(action) = action else {
                continue;
            };

            let this = Rc::clone(self);
            let target = control.clone();
            let on_click = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |e: Event| {
                e.prevent_default();
                if let Err(err) = this.run_modal_action(&target, &action) {
                    log::warn!("Modal action failed: {}", js_error_message(&err));
                }
            }));
            control.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
            wired += 1;
        }
        Ok(wired)
    }

    /// Escape closes every open modal.
    fn wire_escape(self: &Rc<Self>) -> Result<(), JsValue> {
        let this = Rc::clone(self);
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() != "Escape" {
                return;
            }
            let Ok(open) = this.document.query_selector_all(".modal.open") else {
                return;
            };
            for modal in elements(&open) {
                if let Err(err) = this.close_modal(&modal) {
                    log::warn!("Failed to close modal: {}", js_error_message(&err));
                }
            }
        }));
        self.document
            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
        Ok(())
    }
}
