//! REST API Client
//!
//! Thin fetch wrappers around the backend endpoints. Every call is a single
//! attempt; the bearer token is re-read from local storage per call, so a
//! token change takes effect on the next request.

pub mod auth;
pub mod products;
pub mod tasks;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::storage;

/// Backend origin, overridable at build time
const API_ORIGIN: &str = match option_env!("MANGO_API_URL") {
    Some(origin) => origin,
    None => "http://localhost:8000",
};

/// Body shape the backend uses for error responses
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

pub(crate) fn api_url(path: &str) -> String {
    format!("{}/api{}", API_ORIGIN, path)
}

fn current_window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window available".to_string())
}

async fn decode_body<T: DeserializeOwned>(response: &Response) -> Result<T, String> {
    let promise = response.json().map_err(|_| "invalid response body".to_string())?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|_| "invalid response body".to_string())?;
    serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
}

/// Pull the backend's `message` out of a failed response, falling back to a
/// status line when the body is not parseable.
async fn error_message(response: &Response) -> String {
    let fallback = format!("request failed with status {}", response.status());
    let Ok(promise) = response.json() else {
        return fallback;
    };
    let Ok(value) = JsFuture::from(promise).await else {
        return fallback;
    };
    match serde_wasm_bindgen::from_value::<ErrorBody>(value) {
        Ok(body) if !body.message.is_empty() => body.message,
        _ => fallback,
    }
}

/// Perform a JSON request against the backend and decode the response.
///
/// Attaches `credentials: include` and, when a token is stored, a bearer
/// Authorization header. Failures carry the backend's message when one is
/// present, otherwise a normalized transport/status message.
pub(crate) async fn request<T>(method: &str, url: &str, body: Option<String>) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let headers = Headers::new().map_err(|_| "failed to build request headers".to_string())?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| "failed to build request headers".to_string())?;
    if let Some(token) = storage::load_token() {
        headers
            .set("Authorization", &format!("Bearer {}", token))
            .map_err(|_| "failed to build request headers".to_string())?;
    }

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::Cors);
    init.set_credentials(RequestCredentials::Include);
    init.set_headers(&headers);
    if let Some(json) = body {
        init.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|_| "failed to build request".to_string())?;

    let response = JsFuture::from(current_window()?.fetch_with_request(&request))
        .await
        .map_err(|_| "network request failed".to_string())?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "network request failed".to_string())?;

    if !response.ok() {
        return Err(error_message(&response).await);
    }
    decode_body(&response).await
}

/// Plain JSON GET without credentials (used for the public catalog)
pub(crate) async fn fetch_json<T>(url: &str) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let response = JsFuture::from(current_window()?.fetch_with_str(url))
        .await
        .map_err(|_| "network request failed".to_string())?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "network request failed".to_string())?;

    if !response.ok() {
        return Err(format!("request failed with status {}", response.status()));
    }
    decode_body(&response).await
}
