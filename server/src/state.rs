//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries the classification backend; handlers keep no mutable state.

use std::sync::Arc;

use crate::detect::Detector;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<dyn Detector>,
}

impl AppState {
    #[must_use]
    pub fn new(detector: Arc<dyn Detector>) -> Self {
        Self { detector }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
