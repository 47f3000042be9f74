//! HTTP transport for the request console.
//!
//! One `fetch` per call, classified by `restdoc_types::classify_response`.

use restdoc_types::{classify_response, RequestError, RequestPlan, ResponseValue};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, Response};

use crate::dom::js_error_message;

fn transport(context: &str, err: &JsValue) -> RequestError {
    RequestError::Transport { message: format!("{}: {}", context, js_error_message(err)) }
}

/// A rejection caused by our own abort is reported as `Aborted`.
fn failed(signal: Option<&AbortSignal>, context: &str, err: &JsValue) -> RequestError {
    if signal.is_some_and(AbortSignal::aborted) {
        RequestError::Aborted
    } else {
        transport(context, err)
    }
}

/// Issue exactly one request for `plan`. No retries.
pub async fn send(
    plan: &RequestPlan,
    signal: Option<&AbortSignal>,
) -> Result<ResponseValue, RequestError> {
    log::debug!(
        "{} {} ({} byte body)",
        plan.method,
        plan.url,
        plan.body.as_ref().map_or(0, String::len)
    );

    let opts = RequestInit::new();
    opts.set_method(&plan.method);
    if let Some(body) = &plan.body {
        opts.set_body(&JsValue::from_str(body));
    }
    if signal.is_some() {
        opts.set_signal(signal);
    }

    let request = Request::new_with_str_and_init(&plan.url, &opts)
        .map_err(|e| transport("Failed to create request", &e))?;

    if let Some(content_type) = plan.content_type() {
        request
            .headers()
            .set("Content-Type", content_type)
            .map_err(|e| transport("Failed to set headers", &e))?;
    }

    let window = web_sys::window()
        .ok_or_else(|| RequestError::Transport { message: "No window".to_string() })?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| failed(signal, "Fetch failed", &e))?;

    let resp: Response = resp_value.dyn_into().map_err(|_| RequestError::Transport {
        message: "Response is not a Response".to_string(),
    })?;

    let status = resp.status();
    let text = JsFuture::from(resp.text().map_err(|e| transport("Body read failed", &e))?)
        .await
        .map_err(|e| failed(signal, "Body read failed", &e))?;

    classify_response(status, &text.as_string().unwrap_or_default())
}
