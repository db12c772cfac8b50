//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making requests.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/categories");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn run_request(request: Request) -> Result<(u16, String), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    let status = resp.status();
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    Ok((status, text))
}

/// Извлечь текст ошибки из ответа сервера (поле `error`), иначе HTTP-статус
fn error_from_response(status: u16, body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorResponse {
        error: Option<String>,
    }
    if let Ok(data) = serde_json::from_str::<ErrorResponse>(body) {
        if let Some(msg) = data.error {
            return msg;
        }
    }
    format!("HTTP {}", status)
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let (status, text) = run_request(request).await?;
    if !(200..300).contains(&status) {
        return Err(error_from_response(status, &text));
    }
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, String> {
    let payload = serde_json::to_string(body).map_err(|e| format!("{e}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&wasm_bindgen::JsValue::from_str(&payload));

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let (status, text) = run_request(request).await?;
    if !(200..300).contains(&status) {
        return Err(error_from_response(status, &text));
    }
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn delete(path: &str) -> Result<(), String> {
    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let (status, text) = run_request(request).await?;
    if status == 404 {
        return Err("Not found".to_string());
    }
    if !(200..300).contains(&status) {
        return Err(error_from_response(status, &text));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_response_prefers_server_message() {
        let msg = error_from_response(422, r#"{"error":"SKU уже существует"}"#);
        assert_eq!(msg, "SKU уже существует");
    }

    #[test]
    fn test_error_from_response_falls_back_to_status() {
        assert_eq!(error_from_response(500, "not json"), "HTTP 500");
        assert_eq!(error_from_response(400, r#"{"detail":"x"}"#), "HTTP 400");
    }
}
