use super::*;

#[test]
fn user_message_prefers_server_detail() {
    let err = ApiError::Http { status: 401, detail: Some("Invalid email or password".to_owned()) };
    assert_eq!(err.user_message("fallback"), "Invalid email or password");
}

#[test]
fn user_message_falls_back_without_detail() {
    let err = ApiError::Http { status: 500, detail: None };
    assert_eq!(err.user_message("An error occurred during registration"), "An error occurred during registration");
}

#[test]
fn user_message_ignores_blank_detail() {
    let err = ApiError::Http { status: 400, detail: Some("  ".to_owned()) };
    assert_eq!(err.user_message("fallback"), "fallback");
}

#[test]
fn user_message_collapses_network_and_parse_errors() {
    assert_eq!(ApiError::Network("offline".to_owned()).user_message("fallback"), "fallback");
    assert_eq!(ApiError::Parse("eof".to_owned()).user_message("fallback"), "fallback");
    assert_eq!(ApiError::Unavailable.user_message("fallback"), "fallback");
}

#[test]
fn display_includes_status() {
    let err = ApiError::Http { status: 404, detail: None };
    assert_eq!(err.to_string(), "request failed (404)");
}
