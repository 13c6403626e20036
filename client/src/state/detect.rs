//! Detection form state: input text plus the request lifecycle.
//!
//! DESIGN
//! ======
//! The view moves through `Idle -> Loading -> Success | Failed`. At most one
//! request is outstanding: `begin` refuses to start while `Loading`, and
//! `finish` only applies while `Loading`. A new submission discards the
//! previous result or error before the request goes out.

#[cfg(test)]
#[path = "detect_test.rs"]
mod detect_test;

use crate::net::types::{DetectError, DetectionResult};

/// User-facing message shown for every request failure.
pub const DETECT_FAILED_MESSAGE: &str = "Falha ao identificar. Verifique se a API está rodando.";

/// Request lifecycle of the detection form.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; re-submission is disabled.
    Loading,
    /// The last request returned a result.
    Success(DetectionResult),
    /// The last request failed for any reason.
    Failed,
}

/// Form state provided via Leptos context as `RwSignal<DetectState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectState {
    pub text: String,
    pub phase: Phase,
}

impl DetectState {
    /// Replace the input text. Editing is allowed in every phase.
    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// Whether the submit action is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.text.trim().is_empty()
    }

    /// Start a submission.
    ///
    /// Returns the untrimmed text to send, or `None` (leaving state untouched)
    /// when the input is blank or a request is already outstanding.
    pub fn begin(&mut self) -> Option<String> {
        if !self.can_submit() {
            return None;
        }
        self.phase = Phase::Loading;
        Some(self.text.clone())
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// Outcomes arriving while not `Loading` are dropped.
    pub fn finish(&mut self, outcome: Result<DetectionResult, DetectError>) {
        if !self.is_loading() {
            return;
        }
        self.phase = match outcome {
            Ok(result) => Phase::Success(result),
            Err(_) => Phase::Failed,
        };
    }

    /// Result to render, present only after a successful request.
    #[must_use]
    pub fn result(&self) -> Option<&DetectionResult> {
        match &self.phase {
            Phase::Success(result) => Some(result),
            _ => None,
        }
    }

    /// Error to render, present only after a failed request.
    #[must_use]
    pub fn error_message(&self) -> Option<&'static str> {
        matches!(self.phase, Phase::Failed).then_some(DETECT_FAILED_MESSAGE)
    }
}
