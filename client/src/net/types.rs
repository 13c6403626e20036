//! Wire DTOs for the `/detect` contract.
//!
//! DESIGN
//! ======
//! Shared by the browser call in `net::api` and the server relay, so both
//! sides agree on one schema. Values are carried as received; confidence is
//! not range-checked here.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Request body for `POST /detect`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectRequest {
    /// Text exactly as entered by the user (not trimmed).
    pub text: String,
}

/// Classification returned by the detection service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Free-form language label (e.g. `"Python"`, `"pt"`).
    pub language: String,
    /// Backend certainty, nominally in `[0, 1]`.
    pub confidence: f64,
    /// `true` when the input was judged to be source code.
    pub is_code: bool,
}

/// Error body returned by the server for rejected or failed detections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// The single failure class of a detection request.
///
/// Network failures, non-2xx statuses and undecodable bodies all land here;
/// the view does not distinguish between them.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("detect request failed: {reason}")]
pub struct DetectError {
    pub reason: String,
}

impl DetectError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}
