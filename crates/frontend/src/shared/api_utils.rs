//! HTTP helpers for posting back to the current page
//!
//! Every response body is returned as text regardless of status code: the
//! backend answers errors with markup too, and the pages show whatever it
//! sends.

use contracts::shared::routes::RemovalRequest;
use gloo_net::http::Request;
use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{FormData, RequestInit};

use super::dom;
use super::error::ControllerResult;

/// POST a JSON body, return the response body as HTML text
pub async fn post_json_for_html<T: Serialize>(url: &str, body: &T) -> ControllerResult<String> {
    let response = Request::post(url).json(body)?.send().await?;

    if !response.ok() {
        log::warn!("POST {} answered {}, using body anyway", url, response.status());
    }

    Ok(response.text().await?)
}

/// POST a multipart body, return the response body as HTML text
pub async fn post_form_for_html(url: &str, body: FormData) -> ControllerResult<String> {
    let response = Request::post(url).body(body)?.send().await?;

    if !response.ok() {
        log::warn!("POST {} answered {}, using body anyway", url, response.status());
    }

    Ok(response.text().await?)
}

/// Start the cleanup request and return without waiting for it.
///
/// `keepalive` lets the request outlive the page, but delivery is not
/// guaranteed and the outcome is never observed.
pub fn post_keepalive(request: &RemovalRequest) -> ControllerResult<()> {
    let init = RequestInit::new();
    init.set_method(request.method);
    // web-sys has no typed setter for `keepalive`
    Reflect::set(
        &init,
        &JsValue::from_str("keepalive"),
        &JsValue::from_bool(request.keepalive),
    )?;

    let promise = dom::window()?.fetch_with_str_and_init(&request.url, &init);
    // Rejections are ignored.
    let ignore = Closure::<dyn FnMut(JsValue)>::new(|_: JsValue| {});
    let _ = promise.catch(&ignore);
    ignore.forget();
    Ok(())
}
