//! HTTP request layer over the backend REST API.
//!
//! Builds requests against the configured base URL, attaches the bearer
//! token when one is stored, and normalizes non-2xx responses into
//! [`ApiError`] values carrying the server's error detail. One
//! request/response round trip per call: no retries, no timeouts.

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config::API_BASE_URL;
use crate::services::token::get_token;
use crate::types::{ApiError, ApiResult};

/// Absolute URL for an API path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", API_BASE_URL.trim_end_matches('/'), path)
}

/// Start a request against the API: base URL, cross-origin credentials,
/// and the `Authorization: Bearer` header when a token is stored.
///
/// Bodies added by the caller pick their own content-type: `.json()` for
/// JSON, an explicit header for form-urlencoded, nothing for multipart
/// (the transport sets the boundary).
pub fn api_request(method: Method, path: &str) -> RequestBuilder {
    let mut builder = RequestBuilder::new(&api_url(path))
        .method(method)
        .credentials(RequestCredentials::Include);

    if let Some(token) = get_token() {
        builder = builder.header("Authorization", &format!("Bearer {}", token));
    }

    builder
}

/// Extract a human-readable message from an error response body.
///
/// Tries the JSON `detail` field first, falls back to the serialized
/// JSON, the raw text, and finally the status line.
pub fn error_detail(status_text: &str, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|d| d.as_str()) {
            return detail.to_string();
        }
        return value.to_string();
    }
    if body.trim().is_empty() {
        status_text.to_string()
    } else {
        body.to_string()
    }
}

/// Send a built request and fail on transport errors or non-2xx status.
pub async fn send(request: Request) -> ApiResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Http {
        status,
        message: error_detail(&status_text, &body),
    })
}

/// Send a request and decode the JSON response body.
pub async fn fetch_json<T: DeserializeOwned>(request: Request) -> ApiResult<T> {
    let response = send(request).await?;

    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_default();
    if !content_type.contains("application/json") {
        return Err(ApiError::Decode(format!(
            "expected JSON response, got content-type {:?}",
            content_type
        )));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send a request and read the response body as text.
pub async fn fetch_text(request: Request) -> ApiResult<String> {
    let response = send(request).await?;
    response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_prefers_json_detail_field() {
        assert_eq!(
            error_detail("Bad Request", r#"{"detail": "invalid credentials"}"#),
            "invalid credentials"
        );
    }

    #[test]
    fn error_detail_falls_back_to_serialized_json() {
        assert_eq!(
            error_detail("Bad Request", r#"{"code": 42}"#),
            r#"{"code":42}"#
        );
    }

    #[test]
    fn error_detail_falls_back_to_raw_text_then_status() {
        assert_eq!(error_detail("Bad Request", "boom"), "boom");
        assert_eq!(error_detail("Bad Request", ""), "Bad Request");
        assert_eq!(error_detail("Bad Request", "   "), "Bad Request");
    }

    #[test]
    fn api_url_strips_double_slash() {
        let url = api_url("/media/");
        assert!(!url.contains("//media"), "got {}", url);
        assert!(url.ends_with("/media/"));
    }
}
