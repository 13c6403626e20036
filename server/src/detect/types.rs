//! Relay types: upstream errors and health payload.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while calling the classification service.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("upstream request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("upstream request timed out")]
    Timeout,

    /// The service answered with a non-success HTTP status.
    #[error("upstream response error: status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected schema.
    #[error("upstream response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl DetectError {
    pub(crate) fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Request(err.to_string()) }
    }
}

// =============================================================================
// HEALTH
// =============================================================================

/// Health payload reported by the classification service at `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamHealth {
    pub status: String,
    #[serde(default)]
    pub model_loaded: Option<bool>,
}
