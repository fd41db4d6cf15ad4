//! REST Command Wrappers
//!
//! Frontend bindings to backend endpoints, organized by domain.

mod auth;
mod dish;
mod menu;

use serde::de::DeserializeOwned;
use serde::Serialize;
use soundfood_core::load_session;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config;
use crate::settings::LocalStorage;

// Re-export all public items
pub use auth::*;
pub use dish::*;
pub use menu::*;

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}

/// Send a request and return the raw response, failing on non-2xx status
async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let url = config::endpoint(config::api_base_url(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_err)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(js_err)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(js_err)?;
    }
    if let Some(session) = load_session(&LocalStorage) {
        headers.set("Authorization", &session.bearer()).map_err(js_err)?;
    }

    let window = web_sys::window().ok_or("no window")?;
    let value = JsFuture::from(window.fetch_with_request(&request)).await.map_err(js_err)?;
    let response: Response = value.dyn_into().map_err(js_err)?;

    log::debug!("{} {} -> {}", method, url, response.status());
    if !response.ok() {
        return Err(format!("{} {} failed: HTTP {}", method, path, response.status()));
    }
    Ok(response)
}

/// Send a request and decode the JSON response body
async fn request<T: DeserializeOwned>(method: &str, path: &str, body: Option<String>) -> Result<T, String> {
    let response = send(method, path, body).await?;
    let json = JsFuture::from(response.json().map_err(js_err)?).await.map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

/// JSON-encode a request body. `serde_json` keeps `null` fields, which the
/// dish payload relies on.
fn json_body<T: Serialize>(value: &T) -> Result<Option<String>, String> {
    serde_json::to_string(value).map(Some).map_err(|e| e.to_string())
}
