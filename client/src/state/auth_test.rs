use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_loaded_guest() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_loaded_with_token_is_authenticated() {
    let state = AuthState::loaded(Some("abc123".to_owned()));
    assert!(!state.loading);
    assert!(state.is_authenticated());
}

// =============================================================
// SubmitState
// =============================================================

#[test]
fn begin_sets_loading_and_clears_error() {
    let mut state = SubmitState { loading: false, error: "old".to_owned() };
    assert!(state.begin());
    assert!(state.loading);
    assert!(state.error.is_empty());
}

#[test]
fn begin_refuses_reentry_while_loading() {
    let mut state = SubmitState::default();
    assert!(state.begin());
    assert!(!state.begin());
    assert!(state.loading);
}

#[test]
fn settle_success_clears_loading() {
    let mut state = SubmitState::default();
    state.begin();
    let value = state.settle::<u8>(Ok(5), "fallback");
    assert_eq!(value, Some(5));
    assert!(!state.loading);
    assert!(state.error.is_empty());
}

#[test]
fn settle_server_error_surfaces_detail() {
    let mut state = SubmitState::default();
    state.begin();
    let err = ApiError::Http { status: 401, detail: Some("Invalid email or password".to_owned()) };
    assert_eq!(state.settle::<()>(Err(err), "Sign in failed"), None);
    assert!(!state.loading);
    assert_eq!(state.error, "Invalid email or password");
}

#[test]
fn settle_network_error_uses_fallback() {
    let mut state = SubmitState::default();
    state.begin();
    state.settle::<()>(Err(ApiError::Network("offline".to_owned())), "An error occurred during registration");
    assert!(!state.loading);
    assert_eq!(state.error, "An error occurred during registration");
}

#[test]
fn next_begin_after_failure_clears_error() {
    let mut state = SubmitState::default();
    state.begin();
    state.settle::<()>(Err(ApiError::Unavailable), "boom");
    assert!(state.begin());
    assert!(state.error.is_empty());
}
