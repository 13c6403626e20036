//! Presentation helpers for detection results.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Confidence as a percentage with one decimal place (`0.873` -> `"87.3%"`).
///
/// Exact halfway values round away from zero (`0.0025` -> `"0.3%"`).
/// Values outside `[0, 1]` are printed as received.
pub fn format_confidence(confidence: f64) -> String {
    let pct = confidence * 100.0;
    format!("{:.1}%", nudge_exact_tie(pct))
}

/// `{:.1}` breaks exact ties to even. A double sits exactly halfway between
/// two tenths only when it equals `j / 4` for odd `j`; shift those off the
/// tie so the away-from-zero neighbour wins.
fn nudge_exact_tie(pct: f64) -> f64 {
    let quarters = pct * 4.0;
    let is_tie = pct.is_finite() && quarters.fract() == 0.0 && quarters % 2.0 != 0.0;
    if is_tie { pct + 0.05_f64.copysign(pct) } else { pct }
}

/// CSS width for the confidence bar, clamped to `0%..=100%`.
pub fn confidence_bar_width(confidence: f64) -> String {
    let pct = (confidence * 1000.0).round() / 10.0;
    let pct = if pct.is_finite() { pct.clamp(0.0, 100.0) } else { 0.0 };
    format!("{pct}%")
}

/// Badge text for the code / natural-language flag.
pub fn kind_label(is_code: bool) -> &'static str {
    if is_code { "Programação" } else { "Linguagem Natural" }
}

/// Badge modifier class for the code / natural-language flag.
pub fn kind_badge_class(is_code: bool) -> &'static str {
    if is_code { "result-badge result-badge--code" } else { "result-badge result-badge--natural" }
}

/// Submit button label.
pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Analisando..." } else { "Identificar Linguagem" }
}
