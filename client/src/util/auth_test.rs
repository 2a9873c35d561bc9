use super::*;

// =============================================================
// is_authenticated_area
// =============================================================

#[test]
fn home_prefix_is_authenticated_area() {
    assert!(is_authenticated_area("/home"));
    assert!(is_authenticated_area("/home/account"));
}

#[test]
fn other_paths_are_guest_area() {
    assert!(!is_authenticated_area("/"));
    assert!(!is_authenticated_area("/signin"));
    assert!(!is_authenticated_area("/about/home"));
}

// =============================================================
// post_login_destination
// =============================================================

#[test]
fn destination_defaults_to_home() {
    assert_eq!(post_login_destination(None), "/home");
    assert_eq!(post_login_destination(Some("")), "/home");
}

#[test]
fn destination_uses_recorded_route() {
    assert_eq!(post_login_destination(Some("/home/account")), "/home/account");
}

#[test]
fn destination_rejects_off_site_targets() {
    assert_eq!(post_login_destination(Some("https://evil.example")), "/home");
    assert_eq!(post_login_destination(Some("//evil.example")), "/home");
    assert_eq!(post_login_destination(Some("/\\evil.example")), "/home");
}

#[test]
fn flash_only_published_to_pages_with_a_banner() {
    assert!(route_shows_flash("/home"));
    assert!(route_shows_flash("/home/account"));
    assert!(route_shows_flash("/signin"));
    assert!(!route_shows_flash("/"));
    assert!(!route_shows_flash(ITEMS_DEMO_ROUTE));
}

#[test]
fn destination_skips_auth_screens() {
    assert_eq!(post_login_destination(Some("/signin")), "/home");
    assert_eq!(post_login_destination(Some("/signup")), "/home");
}

// =============================================================
// sign_in_redirect_path
// =============================================================

#[test]
fn redirect_path_encodes_origin() {
    assert_eq!(sign_in_redirect_path("/home/account"), "/signin?redirect=%2Fhome%2Faccount");
}

#[test]
fn redirect_path_omits_default_destination() {
    assert_eq!(sign_in_redirect_path("/home"), "/signin");
    assert_eq!(sign_in_redirect_path(""), "/signin");
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_loaded_without_token() {
    let state = AuthState { token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { token: None, loading: true };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_token_exists() {
    let state = AuthState { token: Some("abc123".to_owned()), loading: false };
    assert!(!should_redirect_unauth(&state));
}
