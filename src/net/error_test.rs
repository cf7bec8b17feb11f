use super::*;

// =============================================================
// Status classification
// =============================================================

#[test]
fn unauthorized_maps_to_session_expired() {
    let err = ApiError::from_status(401, r#"{"msg":"Token has expired"}"#);
    assert_eq!(err, ApiError::SessionExpired);
}

#[test]
fn status_error_carries_server_message() {
    let err = ApiError::from_status(400, r#"{"error":"No available copies for reservation"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            code: 400,
            message: "No available copies for reservation".to_owned()
        }
    );
}

#[test]
fn status_error_without_body_falls_back_to_code() {
    let err = ApiError::from_status(500, "");
    assert_eq!(
        err,
        ApiError::Status {
            code: 500,
            message: "request failed with status 500".to_owned()
        }
    );
}

// =============================================================
// Message extraction preference
// =============================================================

#[test]
fn error_message_prefers_error_then_msg_then_message() {
    let err = ApiError::from_status(409, r#"{"error":"m1","msg":"m2","message":"m3"}"#);
    assert_eq!(err.to_string(), "m1");

    let err = ApiError::from_status(409, r#"{"msg":"m2","message":"m3"}"#);
    assert_eq!(err.to_string(), "m2");

    let err = ApiError::from_status(409, r#"{"message":"m3"}"#);
    assert_eq!(err.to_string(), "m3");
}

#[test]
fn error_message_skips_empty_strings() {
    let err = ApiError::from_status(403, r#"{"error":"","msg":"Admin privilege required"}"#);
    assert_eq!(err.to_string(), "Admin privilege required");
}

#[test]
fn non_json_body_falls_back_to_code() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err.to_string(), "request failed with status 502");
}

// =============================================================
// Display
// =============================================================

#[test]
fn session_expired_display_is_user_facing() {
    assert_eq!(
        ApiError::SessionExpired.to_string(),
        "your session has expired; please sign in again"
    );
}
