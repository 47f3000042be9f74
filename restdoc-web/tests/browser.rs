//! DOM behaviour of the request console, run in a headless browser.

use std::cell::RefCell;
use std::rc::Rc;

use restdoc_types::{ClientConfig, ConfigError, ResponseCache};
use restdoc_web::client::{update_input_fields, PanelSlot, ResponsePanel};
use restdoc_web::{config, RequestClient, UiBootstrap};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlSelectElement, KeyboardEvent, KeyboardEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().and_then(|w| w.document()).expect("document")
}

/// Mount `html` in a fresh `<div id=..>` on the body.
fn mount(id: &str, html: &str) -> Element {
    let document = document();
    let root = document.create_element("div").expect("div");
    root.set_id(id);
    root.set_inner_html(html);
    document.body().expect("body").append_child(&root).expect("append");
    root
}

fn select(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).expect("valid selector")
}

#[wasm_bindgen_test]
fn text_inputs_become_selects_keeping_name_and_class() {
    let root = mount(
        "inputs-test",
        r#"<input class="request-parameter" type="text" name="template">
           <input type="hidden" name="template" value="keep">"#,
    );
    let cache = ResponseCache {
        templates: vec!["a".to_string(), "b".to_string()],
        ..Default::default()
    };

    assert!(update_input_fields(&document(), &cache) >= 1);

    let dropdown: HtmlSelectElement = select(&root, "select[name=template]")
        .expect("select inserted")
        .dyn_into()
        .expect("is a select");
    assert!(dropdown.class_list().contains("request-parameter"));
    assert_eq!(dropdown.length(), 2);
    assert_eq!(dropdown.value(), "a");
    assert!(select(&root, "input[type=text][name=template]").is_none());
    assert!(select(&root, "input[type=hidden][name=template]").is_some());

    root.remove();
}

#[wasm_bindgen_test]
fn closed_panel_is_recreated() {
    let root = mount("panel-test", "");
    let slot: PanelSlot = Rc::new(RefCell::new(None));

    ResponsePanel::ensure(&document(), &root, &slot).expect("panel created");
    let close: HtmlElement = select(&root, ".response-container button.close")
        .expect("close button")
        .dyn_into()
        .expect("html element");
    close.click();

    assert!(select(&root, ".response-container").is_none());
    assert!(slot.borrow().is_none());

    ResponsePanel::ensure(&document(), &root, &slot).expect("panel recreated");
    assert!(select(&root, ".response-container pre").is_some());
    assert!(slot.borrow().is_some());

    root.remove();
}

#[wasm_bindgen_test]
fn config_block_missing_invalid_and_valid() {
    let document = document();
    assert_eq!(config::load(&document), Ok(ClientConfig::default()));

    let block = document.create_element("script").expect("script");
    block.set_id(config::CONFIG_ELEMENT_ID);
    block.set_attribute("type", "application/json").expect("type");
    document.body().expect("body").append_child(&block).expect("append");

    block.set_text_content(Some("{not json"));
    assert!(matches!(config::load(&document), Err(ConfigError::ParseError { .. })));
    assert_eq!(config::load_or_default(&document), ClientConfig::default());

    block.set_text_content(Some(r#"{"pretty_indent":4}"#));
    assert_eq!(config::load(&document).map(|c| c.pretty_indent), Ok(4));

    block.remove();
}

#[wasm_bindgen_test]
fn modals_open_close_and_escape() {
    let root = mount(
        "modal-test",
        r#"<button id="modal-test-open" data-open-modal="modal-test-dialog">Open</button>
           <div class="modal" id="modal-test-dialog">
             <button id="modal-test-close" data-close-modal="this">Close</button>
           </div>"#,
    );
    let document = document();
    let window = web_sys::window().expect("window");
    let ui = UiBootstrap::install(window, document.clone(), &ClientConfig::default())
        .expect("bootstrap");
    let modal = select(&root, "#modal-test-dialog").expect("modal");
    let click = |id: &str| {
        let control: HtmlElement = select(&root, &format!("#{id}"))
            .expect("control")
            .dyn_into()
            .expect("html element");
        control.click();
    };

    click("modal-test-open");
    assert!(modal.class_list().contains("open"));
    assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("false"));

    click("modal-test-close");
    assert!(!modal.class_list().contains("open"));

    ui.open_modal("modal-test-dialog").expect("open");
    let init = KeyboardEventInit::new();
    init.set_key("Escape");
    let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
    document.dispatch_event(&escape).expect("dispatch");
    assert!(!modal.class_list().contains("open"));
    assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("true"));

    root.remove();
}

#[wasm_bindgen_test]
fn collapsible_double_toggle_collapses() {
    let root = mount(
        "collapsible-test",
        r#"<button class="collapsible">Section</button><div class="content"></div>"#,
    );
    let window = web_sys::window().expect("window");
    let ui = UiBootstrap::install(window, document(), &ClientConfig::default()).expect("bootstrap");
    let header = select(&root, ".collapsible").expect("header");
    let content: HtmlElement =
        select(&root, ".content").expect("content").dyn_into().expect("html");

    ui.toggle_collapsible(&header).expect("expand");
    assert!(header.class_list().contains("active"));
    assert!(content.style().get_property_value("max-height").expect("style").ends_with("px"));

    ui.toggle_collapsible(&header).expect("collapse");
    assert!(!header.class_list().contains("active"));
    assert_eq!(content.style().get_property_value("max-height").expect("style"), "");

    root.remove();
}

#[wasm_bindgen_test]
fn construction_errors_are_tagged_payloads() {
    let err = RequestClient::new(None).err().expect("null element rejected");
    let payload: serde_json::Value = serde_wasm_bindgen::from_value(err).expect("payload");
    assert_eq!(payload["domain"], "Init");
    assert_eq!(payload["message"], "element is null");

    let detached = document().create_element("button").expect("button");
    let err = RequestClient::new(Some(detached)).err().expect("detached element rejected");
    let payload: serde_json::Value = serde_wasm_bindgen::from_value(err).expect("payload");
    assert_eq!(payload["error"]["type"], "MissingParent");
}

#[wasm_bindgen_test]
fn run_request_enters_loading() {
    let root = mount(
        "run-test",
        r#"<div class="content">
             <div class="actions"><button id="run-test-send">Send</button></div>
           </div>"#,
    );
    let button = select(&root, "#run-test-send");
    let client = RequestClient::new(button).expect("client");
    assert_eq!(client.state(), "idle");

    client.run_request("GET", "/api/run-test/templates");
    assert_eq!(client.state(), "loading");

    let spinner: HtmlElement =
        select(&root, ".spin-container").expect("spinner").dyn_into().expect("html");
    assert_eq!(spinner.style().get_property_value("display").expect("style"), "block");
    let panel: HtmlElement =
        select(&root, ".response-container").expect("panel").dyn_into().expect("html");
    assert_eq!(panel.style().get_property_value("display").expect("style"), "none");

    root.remove();
}
