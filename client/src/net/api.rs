//! HTTP calls to the summarizer backend.
//!
//! Client-side (hydrate): real POSTs via `gloo-net`.
//! Server-side (SSR) and native tests: calls report
//! [`TransportError::Unavailable`] since these endpoints are only reached from
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Only failures that produced no decodable envelope become `Err`. A backend
//! answer with `success: false` is returned as `Ok` so callers can surface the
//! server's own message. Transport details are logged here and nowhere else.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::TransportError;
use super::types::{ApiResponse, ChatReply, ChatRequest, SummarizeRequest, Summary};

pub const SUMMARIZE_PATH: &str = "/api/summarize";
pub const CHAT_PATH: &str = "/api/chat";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Request a structured summary via `POST /api/summarize`.
///
/// # Errors
///
/// Returns a [`TransportError`] if the request cannot be sent or the response
/// body is not a valid envelope.
pub async fn summarize(base_url: &str, request: &SummarizeRequest) -> Result<ApiResponse<Summary>, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let result = post_json(&endpoint(base_url, SUMMARIZE_PATH), request).await;
        if let Err(e) = &result {
            log::error!("summarize request failed: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, request);
        Err(TransportError::Unavailable)
    }
}

/// Send a follow-up chat message via `POST /api/chat`.
///
/// # Errors
///
/// Returns a [`TransportError`] if the request cannot be sent or the response
/// body is not a valid envelope.
pub async fn chat(base_url: &str, request: &ChatRequest) -> Result<ApiResponse<ChatReply>, TransportError> {
    #[cfg(feature = "hydrate")]
    {
        let result = post_json(&endpoint(base_url, CHAT_PATH), request).await;
        if let Err(e) = &result {
            log::error!("chat request failed: {e}");
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base_url, request);
        Err(TransportError::Unavailable)
    }
}

// The backend reports failures inside the envelope even on non-2xx statuses,
// so the status code is logged but not used to classify the outcome.
#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<ApiResponse<T>, TransportError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| TransportError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| TransportError::Request(e.to_string()))?;
    if !resp.ok() {
        log::warn!("{url} responded with status {}", resp.status());
    }
    resp.json::<ApiResponse<T>>()
        .await
        .map_err(|e| TransportError::Decode(e.to_string()))
}
