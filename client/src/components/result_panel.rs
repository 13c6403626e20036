//! Result panel for a successful detection.
//!
//! DESIGN
//! ======
//! Two cards side by side: the detected language with its code/natural badge,
//! and the confidence percentage with a progress bar. All text comes from
//! `util::format` so display rules stay testable outside the DOM.

#[cfg(test)]
#[path = "result_panel_test.rs"]
mod result_panel_test;

use leptos::prelude::*;

use crate::net::types::DetectionResult;
use crate::util::format::{confidence_bar_width, format_confidence, kind_badge_class, kind_label};

/// Render one detection result.
#[component]
pub fn ResultPanel(result: DetectionResult) -> impl IntoView {
    let DetectionResult { language, confidence, is_code } = result;
    let bar_style = format!("width: {}", confidence_bar_width(confidence));

    view! {
        <section class="result-panel" aria-live="polite">
            <div class="result-card">
                <span class="result-card__label">"Linguagem Detectada"</span>
                <div class="result-card__value">{language}</div>
                <span class=kind_badge_class(is_code)>{kind_label(is_code)}</span>
            </div>
            <div class="result-card">
                <span class="result-card__label">"Grau de Confiança"</span>
                <div class="result-card__value">{format_confidence(confidence)}</div>
                <div class="confidence-bar">
                    <div class="confidence-bar__fill" style=bar_style></div>
                </div>
            </div>
        </section>
    }
}
