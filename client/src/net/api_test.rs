use super::*;

#[test]
fn detect_endpoint_is_same_origin_path() {
    assert_eq!(DETECT_ENDPOINT, "/detect");
}

#[test]
fn detect_failed_status_message_formats_status() {
    assert_eq!(detect_failed_status_message(502), "status 502");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn detect_is_unavailable_without_browser() {
    let err = futures::executor::block_on(detect("def foo(): pass")).unwrap_err();
    assert_eq!(err.reason, "not available on server");
}
