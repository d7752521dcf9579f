//! REST helpers for the notification endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Host builds: stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`ApiError`] naming the stage that failed. Callers log
//! it and keep the previous UI state; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::{MarkReadResponse, NotificationCount};

/// Django reads this to answer with JSON instead of a redirect.
pub const AJAX_HEADER: &str = "X-Requested-With";
pub const AJAX_HEADER_VALUE: &str = "XMLHttpRequest";
pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
    #[error("server reported failure")]
    Rejected,
    #[error("not available outside the browser")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn mark_read_endpoint(notifications_path: &str, notification_id: u32) -> String {
    format!("{notifications_path}mark-read/{notification_id}/")
}

#[cfg(any(test, feature = "hydrate"))]
fn mark_all_read_endpoint(notifications_path: &str) -> String {
    format!("{notifications_path}mark-all-read/")
}

/// Extract the CSRF token from a `document.cookie` string.
#[must_use]
pub fn csrf_token_from_cookie(cookie: &str) -> Option<String> {
    cookie
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == CSRF_COOKIE)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(std::borrow::Cow::into_owned)
        .filter(|token| !token.is_empty())
}

#[cfg(feature = "hydrate")]
fn csrf_token() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = crate::util::dom::document()?.dyn_into::<web_sys::HtmlDocument>().ok()?;
    csrf_token_from_cookie(&document.cookie().ok()?)
}

#[cfg(feature = "hydrate")]
async fn post_ajax(url: &str) -> Result<MarkReadResponse, ApiError> {
    let mut request = gloo_net::http::Request::post(url).header(AJAX_HEADER, AJAX_HEADER_VALUE);
    if let Some(token) = csrf_token() {
        request = request.header(CSRF_HEADER, &token);
    }
    let resp = request.send().await.map_err(|e| ApiError::Request(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body: MarkReadResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
    if !body.success {
        return Err(ApiError::Rejected);
    }
    Ok(body)
}

/// Fetch the unread notification count from `path`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the server answers with a
/// non-OK status, or the body is not a count object.
pub async fn fetch_notification_count(path: &str) -> Result<u64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: NotificationCount = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.unread())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// Mark one notification read via `POST {notifications_path}mark-read/{id}/`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server does not
/// report success.
pub async fn mark_notification_read(notifications_path: &str, notification_id: u32) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_ajax(&mark_read_endpoint(notifications_path, notification_id)).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notifications_path, notification_id);
        Err(ApiError::Unavailable)
    }
}

/// Mark every notification read. Returns how many were marked.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the server does not
/// report success.
pub async fn mark_all_notifications_read(notifications_path: &str) -> Result<u64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = post_ajax(&mark_all_read_endpoint(notifications_path)).await?;
        Ok(body.marked_count.unwrap_or(0))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notifications_path;
        Err(ApiError::Unavailable)
    }
}
