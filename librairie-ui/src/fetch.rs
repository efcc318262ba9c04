//! Async wrapper over the browser Fetch API.
//!
//! Runs on the single WASM thread; awaiting the response suspends only the
//! issuing task. No timeout is imposed and the browser-side request is never
//! aborted: overlapping filter requests are raced and the stale one is
//! discarded by the controller's generation ticket instead.

use librairie_catalog::CatalogError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch `url` and return the response body as text.
///
/// Every JS-side rejection (network failure, missing window, non-text body)
/// maps to [`CatalogError::Transport`]; callers log it and leave the display
/// region untouched.
pub async fn fetch_text(url: &str) -> Result<String, CatalogError> {
    let window = web_sys::window()
        .ok_or_else(|| CatalogError::Transport("no window object".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| CatalogError::Transport("fetch did not yield a Response".to_string()))?;

    let body = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    body.as_string()
        .ok_or_else(|| CatalogError::Transport("response body was not text".to_string()))
}

fn js_error(value: JsValue) -> CatalogError {
    let text = value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"));
    CatalogError::Transport(text)
}
