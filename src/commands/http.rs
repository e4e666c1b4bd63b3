//! Fetch Transport
//!
//! Thin wrapper over `window.fetch` returning status and body text.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Status and body of a completed request
#[derive(Debug)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub ok: bool,
    pub body: String,
}

/// Send a request with an optional JSON body.
/// `Err` means the request never produced a response.
pub(crate) async fn send(method: &str, url: &str, json_body: Option<String>) -> Result<HttpResponse, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(json) = json_body {
        let headers = Headers::new().map_err(js_error)?;
        headers.set("Content-Type", "application/json").map_err(js_error)?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    let window = web_sys::window().ok_or("no window available")?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    // An unreadable body is treated as empty; the status still decides
    let body = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|text| text.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    Ok(HttpResponse {
        status: response.status(),
        ok: response.ok(),
        body,
    })
}

fn js_error(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
