//! `window.fetch` interop for catalog requests, with a non-wasm fallback shim.

use catalog_host::FetchError;

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    fn transport(err: JsValue) -> FetchError {
        FetchError::Transport {
            message: js_error_to_string(err),
        }
    }

    pub async fn http_get_text(url: &str) -> Result<String, FetchError> {
        let window = web_sys::window().ok_or(FetchError::Unavailable)?;
        let value = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(transport)?;
        let response: Response = value.dyn_into().map_err(|_| FetchError::Transport {
            message: "fetch resolved to a non-Response value".to_string(),
        })?;
        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }
        let body = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        body.as_string().ok_or_else(|| FetchError::Decode {
            message: "response body is not text".to_string(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    pub async fn http_get_text(_url: &str) -> Result<String, FetchError> {
        Err(FetchError::Unavailable)
    }
}

/// Performs a `GET` and returns the body text of a successful response.
pub async fn http_get_text(url: &str) -> Result<String, FetchError> {
    imp::http_get_text(url).await
}
