//! API utilities for frontend-backend communication
//!
//! Resolves the REST base URL and wraps `gloo_net` requests so every caller
//! gets the same error classification.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Backend address used when the console itself is served from this machine.
pub const LOCAL_API_BASE: &str = "http://127.0.0.1:5000";

/// Failure of a backend call.
///
/// The three kinds drive how the UI reports a problem: validation problems are
/// shown inline before any request, transport problems get a generic prefix,
/// application problems carry the server's own message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Application(String),
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Pick the API base for a page location.
///
/// A non-empty `override_base` wins; a page served from `localhost` or
/// `127.0.0.1` talks to the local backend; anything else uses its own origin.
pub fn resolve_api_base(override_base: Option<&str>, origin: &str, hostname: &str) -> String {
    if let Some(base) = override_base.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_API_BASE.to_string()
    } else {
        origin.trim_end_matches('/').to_string()
    }
}

/// Get the base URL for API requests
///
/// # Returns
/// - `CATALOG_API_BASE` when it was set at compile time
/// - "http://127.0.0.1:5000" when served locally
/// - the page origin otherwise (empty string if window is not available)
pub fn api_base() -> String {
    let override_base = option_env!("CATALOG_API_BASE");
    let window = match web_sys::window() {
        Some(w) => w,
        None => return resolve_api_base(override_base, "", ""),
    };
    let location = window.location();
    let origin = location.origin().unwrap_or_default();
    let hostname = location.hostname().unwrap_or_default();
    resolve_api_base(override_base, &origin, &hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```ignore
/// let url = api_url("/get_all_products");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Build a URL with one encoded query parameter.
pub fn api_url_with_query(path: &str, key: &str, value: &str) -> String {
    format!("{}?{}={}", api_url(path), key, urlencoding::encode(value))
}

/// Reject non-2xx responses, then decode the JSON body.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(ApiError::Transport(format!(
            "HTTP error! status: {}",
            response.status()
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(ApiError::transport)?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(ApiError::transport)?;
    read_json(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ApiError> {
    let response = Request::put(url)
        .json(body)
        .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(ApiError::transport)?;
    read_json(response).await
}

/// POST without a body; the backend still expects a JSON content type.
pub async fn post_empty<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::post(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(ApiError::transport)?;
    read_json(response).await
}

pub async fn delete_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let response = Request::delete(url)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(ApiError::transport)?;
    read_json(response).await
}

/// User-facing text for a failed action.
///
/// Application failures read "<failed_prefix>: <server message>", transport
/// failures "<error_prefix>: <reason>", validation messages are shown as-is.
pub fn describe_error(err: &ApiError, failed_prefix: &str, error_prefix: &str) -> String {
    match err {
        ApiError::Validation(msg) => msg.clone(),
        ApiError::Application(msg) => format!("{}: {}", failed_prefix, msg),
        ApiError::Transport(msg) => format!("{}: {}", error_prefix, msg),
    }
}

/// Where a form shows a failed save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDisplay {
    /// Next to the form fields
    Inline(String),
    /// Blocking alert
    Alert(String),
}

/// Validation problems stay in the form; server and transport failures alert.
pub fn error_display(err: &ApiError, failed_prefix: &str, error_prefix: &str) -> ErrorDisplay {
    let text = describe_error(err, failed_prefix, error_prefix);
    match err {
        ApiError::Validation(_) => ErrorDisplay::Inline(text),
        ApiError::Application(_) | ApiError::Transport(_) => ErrorDisplay::Alert(text),
    }
}

/// Blocking browser alert, used for table-level failures.
pub fn show_error(message: &str) {
    log::error!("{}", message);
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_hosts_use_local_backend() {
        assert_eq!(
            resolve_api_base(None, "http://localhost:8080", "localhost"),
            "http://127.0.0.1:5000"
        );
        assert_eq!(
            resolve_api_base(None, "http://127.0.0.1:8080", "127.0.0.1"),
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    fn test_deployed_uses_origin() {
        assert_eq!(
            resolve_api_base(None, "https://catalog.example.com/", "catalog.example.com"),
            "https://catalog.example.com"
        );
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.com/"), "http://localhost", "localhost"),
            "https://api.example.com"
        );
        assert_eq!(
            resolve_api_base(Some("  "), "https://a.example.com", "a.example.com"),
            "https://a.example.com"
        );
    }

    #[test]
    fn test_describe_error() {
        let failed = "Failed to delete product";
        let errored = "Error deleting product";
        assert_eq!(
            describe_error(&ApiError::Application("not found".into()), failed, errored),
            "Failed to delete product: not found"
        );
        assert_eq!(
            describe_error(&ApiError::Transport("HTTP error! status: 500".into()), failed, errored),
            "Error deleting product: HTTP error! status: 500"
        );
        assert_eq!(
            describe_error(&ApiError::Validation("SKU and Name are required".into()), failed, errored),
            "SKU and Name are required"
        );
    }

    #[test]
    fn test_save_failures_alert_unless_validation() {
        let failed = "Failed to create product";
        let errored = "Error creating product";
        assert_eq!(
            error_display(&ApiError::Application("duplicate SKU".into()), failed, errored),
            ErrorDisplay::Alert("Failed to create product: duplicate SKU".to_string())
        );
        assert_eq!(
            error_display(&ApiError::Transport("HTTP error! status: 502".into()), failed, errored),
            ErrorDisplay::Alert("Error creating product: HTTP error! status: 502".to_string())
        );
        assert_eq!(
            error_display(&ApiError::Validation("SKU and Name are required".into()), failed, errored),
            ErrorDisplay::Inline("SKU and Name are required".to_string())
        );
    }

    #[test]
    fn test_error_display_is_message() {
        let err = ApiError::Application("duplicate SKU".to_string());
        assert_eq!(err.to_string(), "duplicate SKU");
        assert_eq!(ApiError::transport("offline"), ApiError::Transport("offline".into()));
    }
}
