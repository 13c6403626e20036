//! Detection relay route.
//!
//! DESIGN
//! ======
//! `POST /detect` is the browser's only data call. Blank text is rejected
//! here without reaching the classification service; every upstream failure
//! collapses to a gateway status with a fixed detail, since the page shows
//! one generic message for any non-2xx.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use detector_client::net::types::{DetectRequest, DetectionResult, ErrorDetail};
use tracing::{info, warn};

use crate::detect::DetectError;
use crate::state::AppState;

pub const EMPTY_TEXT_DETAIL: &str = "Text cannot be empty.";
pub const RELAY_FAILED_DETAIL: &str = "Detection service unavailable.";

type Rejection = (StatusCode, Json<ErrorDetail>);

/// `POST /detect`: classify text via the upstream service.
pub async fn detect(
    State(state): State<AppState>,
    Json(body): Json<DetectRequest>,
) -> Result<Json<DetectionResult>, Rejection> {
    if body.text.trim().is_empty() {
        return Err(reject(StatusCode::BAD_REQUEST, EMPTY_TEXT_DETAIL));
    }

    match state.detector.detect(&body.text).await {
        Ok(result) => {
            info!(
                language = %result.language,
                confidence = result.confidence,
                is_code = result.is_code,
                chars = body.text.chars().count(),
                "detection relayed"
            );
            Ok(Json(result))
        }
        Err(e) => {
            let status = detect_error_to_status(&e);
            if let DetectError::Status { status: upstream, body } = &e {
                warn!(upstream_status = upstream, %body, "detection relay failed");
            } else {
                warn!(error = %e, "detection relay failed");
            }
            Err(reject(status, RELAY_FAILED_DETAIL))
        }
    }
}

fn reject(status: StatusCode, detail: &str) -> Rejection {
    (status, Json(ErrorDetail { detail: detail.to_owned() }))
}

pub(crate) fn detect_error_to_status(err: &DetectError) -> StatusCode {
    match err {
        DetectError::Request(_) | DetectError::Timeout | DetectError::Status { .. } | DetectError::Parse(_) => {
            StatusCode::BAD_GATEWAY
        }
        DetectError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
