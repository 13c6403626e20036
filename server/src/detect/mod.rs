//! Detect: client for the external classification service.
//!
//! DESIGN
//! ======
//! Routes depend on the [`Detector`] trait rather than on HTTP directly, so
//! handler tests can substitute a mock. [`HttpDetector`] is the production
//! implementation built from [`UpstreamConfig`](crate::config::UpstreamConfig).

pub mod http;
pub mod types;

use detector_client::net::types::DetectionResult;

pub use http::HttpDetector;
pub use types::{DetectError, UpstreamHealth};

/// Classification backend seam.
#[async_trait::async_trait]
pub trait Detector: Send + Sync {
    /// Classify `text`, passed through exactly as the browser sent it.
    ///
    /// # Errors
    ///
    /// Returns a [`DetectError`] if the service is unreachable, answers with a
    /// non-success status, or returns a malformed body.
    async fn detect(&self, text: &str) -> Result<DetectionResult, DetectError>;

    /// Query the service's own health check.
    ///
    /// # Errors
    ///
    /// Returns a [`DetectError`] if the health endpoint cannot be reached or
    /// decoded.
    async fn health(&self) -> Result<UpstreamHealth, DetectError>;
}
