//! Health routes.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;
use tracing::debug;

use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UpstreamStatus {
    pub reachable: bool,
    pub model_loaded: Option<bool>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub upstream: UpstreamStatus,
}

/// `GET /api/health`: relay status plus the classification service's own
/// health check. Always 200; an unreachable upstream is reported in the body.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let upstream = match state.detector.health().await {
        Ok(h) => {
            debug!(upstream_status = %h.status, model_loaded = ?h.model_loaded, "upstream health");
            UpstreamStatus { reachable: true, model_loaded: h.model_loaded }
        }
        Err(e) => {
            debug!(error = %e, "upstream health check failed");
            UpstreamStatus { reachable: false, model_loaded: None }
        }
    };
    Json(HealthResponse { status: "running", upstream })
}

/// `GET /healthz`: liveness probe.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
