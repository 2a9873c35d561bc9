use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("http://127.0.0.1:8000", SIGN_IN_PATH), "http://127.0.0.1:8000/api/auth/signin");
    assert_eq!(endpoint("", SIGN_UP_PATH), "/api/auth/signup");
}

#[test]
fn detail_from_body_reads_detail() {
    assert_eq!(
        detail_from_body(r#"{"detail":"Invalid email or password"}"#).as_deref(),
        Some("Invalid email or password")
    );
}

#[test]
fn detail_from_body_tolerates_garbage() {
    assert_eq!(detail_from_body(""), None);
    assert_eq!(detail_from_body("<html>502</html>"), None);
    assert_eq!(detail_from_body("{}"), None);
}

#[test]
fn detail_from_body_ignores_non_string_detail() {
    // Framework validation errors can put a list under `detail`.
    assert_eq!(detail_from_body(r#"{"detail":[{"msg":"field required"}]}"#), None);
}

#[test]
fn http_error_surfaces_exact_server_message() {
    let err = http_error(401, r#"{"detail":"Invalid email or password"}"#);
    assert_eq!(err.user_message("Something else"), "Invalid email or password");
}

#[test]
fn http_error_without_body_uses_fallback() {
    let err = http_error(400, "");
    assert_eq!(err, ApiError::Http { status: 400, detail: None });
    assert_eq!(err.user_message("Invalid email or password"), "Invalid email or password");
}

#[test]
fn bearer_header_prefixes_scheme() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

#[test]
fn account_paths_sit_under_api() {
    assert_eq!(endpoint("", PROFILE_PATH), "/api/user/profile");
    assert_eq!(endpoint("", CHANGE_PASSWORD_PATH), "/api/user/change-password");
}
