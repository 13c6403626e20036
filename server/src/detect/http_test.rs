use super::*;
use crate::config::UpstreamTimeouts;

fn config(base_url: &str) -> UpstreamConfig {
    UpstreamConfig {
        base_url: base_url.to_owned(),
        timeouts: UpstreamTimeouts { request_secs: 30, connect_secs: 5 },
    }
}

// ===== urls =====

#[test]
fn detect_url_appends_path() {
    let detector = HttpDetector::new(&config("http://localhost:8000")).unwrap();
    assert_eq!(detector.detect_url(), "http://localhost:8000/detect");
    assert_eq!(detector.health_url(), "http://localhost:8000/");
    assert_eq!(detector.base_url(), "http://localhost:8000");
}

#[test]
fn detect_url_keeps_base_path_prefix() {
    let detector = HttpDetector::new(&config("https://svc.example.test/lang")).unwrap();
    assert_eq!(detector.detect_url(), "https://svc.example.test/lang/detect");
}

// ===== decode_response =====

#[test]
fn decode_success_body() {
    let body = r#"{"language":"Python","confidence":0.95,"is_code":true}"#;
    let result: DetectionResult = decode_response(200, body).unwrap();
    assert_eq!(result.language, "Python");
    assert!((result.confidence - 0.95).abs() < f64::EPSILON);
    assert!(result.is_code);
}

#[test]
fn decode_non_success_status_keeps_status_and_body() {
    let body = r#"{"detail":"Model not loaded on server."}"#;
    let err = decode_response::<DetectionResult>(500, body).unwrap_err();
    match err {
        DetectError::Status { status, body: kept } => {
            assert_eq!(status, 500);
            assert!(kept.contains("Model not loaded"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn decode_client_error_status_is_not_parsed() {
    let body = r#"{"language":"x","confidence":1,"is_code":false}"#;
    let err = decode_response::<DetectionResult>(400, body).unwrap_err();
    assert!(matches!(err, DetectError::Status { status: 400, .. }));
}

#[test]
fn decode_malformed_body_is_parse_error() {
    let err = decode_response::<DetectionResult>(200, "<html>oops</html>").unwrap_err();
    assert!(matches!(err, DetectError::Parse(_)));
}

#[test]
fn decode_missing_field_is_parse_error() {
    let err = decode_response::<DetectionResult>(200, r#"{"language":"Go"}"#).unwrap_err();
    assert!(matches!(err, DetectError::Parse(_)));
}

#[test]
fn decode_health_payload() {
    let body = r#"{"status":"running","model_loaded":true}"#;
    let health: UpstreamHealth = decode_response(200, body).unwrap();
    assert_eq!(health, UpstreamHealth { status: "running".into(), model_loaded: Some(true) });
}

#[test]
fn decode_health_without_model_flag() {
    let health: UpstreamHealth = decode_response(200, r#"{"status":"running"}"#).unwrap();
    assert_eq!(health.model_loaded, None);
}

// ===== truncate_body =====

#[test]
fn truncate_body_caps_length() {
    let long = "é".repeat(MAX_LOGGED_BODY_CHARS + 10);
    assert_eq!(truncate_body(&long).chars().count(), MAX_LOGGED_BODY_CHARS);
    assert_eq!(truncate_body("short"), "short");
}

// ===== live service =====

#[tokio::test]
async fn unreachable_service_is_request_error() {
    let detector = HttpDetector::new(&config("http://127.0.0.1:9")).unwrap();
    let err = detector.detect("def foo(): pass").await.unwrap_err();
    assert!(matches!(err, DetectError::Request(_) | DetectError::Timeout));
}
