//! HTTP call to the detection endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since detection only runs in
//! response to a browser submit.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`DetectError`]; callers show one fixed
//! message and never inspect the reason beyond logging it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{DetectError, DetectionResult};

/// Same-origin path of the detection endpoint.
pub const DETECT_ENDPOINT: &str = "/detect";

#[cfg(any(test, feature = "hydrate"))]
fn detect_failed_status_message(status: u16) -> String {
    format!("status {status}")
}

/// Ask the detection service to classify `text`.
///
/// The text is sent exactly as given; blank-input filtering happens in the
/// view state before this is called.
///
/// # Errors
///
/// Returns [`DetectError`] on network failure, non-2xx status, or a body
/// that does not decode as a [`DetectionResult`].
pub async fn detect(text: &str) -> Result<DetectionResult, DetectError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = super::types::DetectRequest { text: text.to_owned() };
        let resp = gloo_net::http::Request::post(DETECT_ENDPOINT)
            .json(&payload)
            .map_err(|e| DetectError::new(e.to_string()))?
            .send()
            .await
            .map_err(|e| DetectError::new(e.to_string()))?;
        if !resp.ok() {
            return Err(DetectError::new(detect_failed_status_message(resp.status())));
        }
        resp.json::<DetectionResult>()
            .await
            .map_err(|e| DetectError::new(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err(DetectError::new("not available on server"))
    }
}
