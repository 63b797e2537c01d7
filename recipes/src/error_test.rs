use super::*;

#[test]
fn check_status_accepts_success_range() {
    assert_eq!(ApiError::check_status(200), Ok(()));
    assert_eq!(ApiError::check_status(201), Ok(()));
    assert_eq!(ApiError::check_status(299), Ok(()));
}

#[test]
fn check_status_rejects_everything_else() {
    assert_eq!(ApiError::check_status(199), Err(ApiError::Status(199)));
    assert_eq!(ApiError::check_status(400), Err(ApiError::Status(400)));
    assert_eq!(ApiError::check_status(500), Err(ApiError::Status(500)));
}

#[test]
fn display_includes_detail() {
    assert_eq!(ApiError::Status(404).to_string(), "server responded with status 404");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "request failed: offline");
}

#[test]
fn serde_errors_become_decode_errors() {
    let err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
    assert!(matches!(ApiError::from(err), ApiError::Decode(_)));
}
