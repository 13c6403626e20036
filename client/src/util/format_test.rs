use super::*;

// =============================================================
// format_confidence
// =============================================================

#[test]
fn format_confidence_uses_one_decimal() {
    assert_eq!(format_confidence(0.873), "87.3%");
    assert_eq!(format_confidence(0.95), "95.0%");
    assert_eq!(format_confidence(1.0), "100.0%");
    assert_eq!(format_confidence(0.0), "0.0%");
}

#[test]
fn format_confidence_rounds_to_nearest_tenth() {
    assert_eq!(format_confidence(0.4567), "45.7%");
    assert_eq!(format_confidence(0.1234), "12.3%");
}

#[test]
fn format_confidence_rounds_exact_ties_up() {
    assert_eq!(format_confidence(0.0025), "0.3%");
    assert_eq!(format_confidence(0.0125), "1.3%");
    assert_eq!(format_confidence(0.0075), "0.8%");
    assert_eq!(format_confidence(0.8725), "87.3%");
}

#[test]
fn format_confidence_leaves_near_ties_alone() {
    assert_eq!(format_confidence(0.00249), "0.2%");
    assert_eq!(format_confidence(0.00251), "0.3%");
}

#[test]
fn format_confidence_does_not_clamp() {
    assert_eq!(format_confidence(1.5), "150.0%");
}

// =============================================================
// confidence_bar_width
// =============================================================

#[test]
fn confidence_bar_width_matches_percentage() {
    assert_eq!(confidence_bar_width(0.95), "95%");
    assert_eq!(confidence_bar_width(0.873), "87.3%");
    assert_eq!(confidence_bar_width(1.0), "100%");
    assert_eq!(confidence_bar_width(0.0), "0%");
}

#[test]
fn confidence_bar_width_clamps_out_of_range() {
    assert_eq!(confidence_bar_width(1.7), "100%");
    assert_eq!(confidence_bar_width(-0.2), "0%");
    assert_eq!(confidence_bar_width(f64::NAN), "0%");
}

// =============================================================
// Labels
// =============================================================

#[test]
fn kind_label_distinguishes_code_from_text() {
    assert_eq!(kind_label(true), "Programação");
    assert_eq!(kind_label(false), "Linguagem Natural");
}

#[test]
fn kind_badge_class_differs_by_kind() {
    assert_ne!(kind_badge_class(true), kind_badge_class(false));
    assert!(kind_badge_class(true).contains("--code"));
    assert!(kind_badge_class(false).contains("--natural"));
}

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(true), "Analisando...");
    assert_eq!(submit_label(false), "Identificar Linguagem");
}
