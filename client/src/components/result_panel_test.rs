use leptos::tachys::view::RenderHtml;

use super::*;

fn render(result: DetectionResult) -> String {
    Owner::new().with(|| view! { <ResultPanel result/> }.to_html())
}

#[test]
fn python_code_result_renders_language_badge_and_confidence() {
    let html = render(DetectionResult { language: "Python".to_owned(), confidence: 0.95, is_code: true });
    assert!(html.contains("Python"));
    assert!(html.contains("Programação"));
    assert!(html.contains("result-badge--code"));
    assert!(html.contains("95.0%"));
    assert!(html.contains("width: 95%"));
}

#[test]
fn natural_language_result_uses_natural_badge() {
    let html = render(DetectionResult { language: "pt".to_owned(), confidence: 0.873, is_code: false });
    assert!(html.contains("Linguagem Natural"));
    assert!(html.contains("result-badge--natural"));
    assert!(!html.contains("Programação"));
    assert!(html.contains("87.3%"));
    assert!(html.contains("width: 87.3%"));
}

#[test]
fn result_panel_shows_both_card_headings() {
    let html = render(DetectionResult { language: "Rust".to_owned(), confidence: 0.5, is_code: true });
    assert!(html.contains("Linguagem Detectada"));
    assert!(html.contains("Grau de Confiança"));
}

#[test]
fn out_of_range_confidence_keeps_text_but_clamps_bar() {
    let html = render(DetectionResult { language: "Go".to_owned(), confidence: 1.5, is_code: true });
    assert!(html.contains("150.0%"));
    assert!(html.contains("width: 100%"));
}
