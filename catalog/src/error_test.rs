use super::*;

#[test]
fn status_error_formats_code() {
    assert_eq!(ApiError::Status(404).to_string(), "backend responded with status 404");
}

#[test]
fn status_accessor_only_matches_status_variant() {
    assert_eq!(ApiError::Status(500).status(), Some(500));
    assert_eq!(ApiError::Network("refused".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
}

#[test]
fn json_errors_convert_to_decode() {
    let err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated json");
    assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
}
