//! HTTP implementation of [`Detector`] over `reqwest`.
//!
//! Sends `POST {base}/detect` with `{ "text": ... }` and `GET {base}/` for the
//! health check. Status handling and body decoding are split into pure
//! functions so they can be tested without a live service.

use std::time::Duration;

use detector_client::net::types::{DetectRequest, DetectionResult};
use serde::de::DeserializeOwned;

use super::Detector;
use super::types::{DetectError, UpstreamHealth};
use crate::config::UpstreamConfig;

const MAX_LOGGED_BODY_CHARS: usize = 512;

pub struct HttpDetector {
    http: reqwest::Client,
    base_url: String,
}

impl HttpDetector {
    /// Build a client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`DetectError::HttpClientBuild`] if the TLS backend or client
    /// builder fails.
    pub fn new(config: &UpstreamConfig) -> Result<Self, DetectError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| DetectError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn detect_url(&self) -> String {
        endpoint(&self.base_url, "/detect")
    }

    fn health_url(&self) -> String {
        endpoint(&self.base_url, "/")
    }

    async fn read_response(response: reqwest::Response) -> Result<(u16, String), DetectError> {
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| DetectError::from_reqwest(&e))?;
        Ok((status, text))
    }
}

#[async_trait::async_trait]
impl Detector for HttpDetector {
    async fn detect(&self, text: &str) -> Result<DetectionResult, DetectError> {
        let body = DetectRequest { text: text.to_owned() };
        let response = self
            .http
            .post(self.detect_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| DetectError::from_reqwest(&e))?;
        let (status, text) = Self::read_response(response).await?;
        decode_response(status, &text)
    }

    async fn health(&self) -> Result<UpstreamHealth, DetectError> {
        let response = self
            .http
            .get(self.health_url())
            .send()
            .await
            .map_err(|e| DetectError::from_reqwest(&e))?;
        let (status, text) = Self::read_response(response).await?;
        decode_response(status, &text)
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

/// Map an upstream status + body into a typed value or [`DetectError`].
fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, DetectError> {
    if !(200..300).contains(&status) {
        return Err(DetectError::Status { status, body: truncate_body(body) });
    }
    serde_json::from_str(body).map_err(|e| DetectError::Parse(e.to_string()))
}

fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_LOGGED_BODY_CHARS).collect()
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
