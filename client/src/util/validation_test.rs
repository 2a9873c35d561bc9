use super::*;

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_simple_address() {
    assert!(is_valid_email("user@example.com"));
    assert_eq!(email_error("user@example.com"), None);
}

#[test]
fn email_rejects_missing_at() {
    assert!(!is_valid_email("user.example.com"));
    assert_eq!(email_error("user.example.com"), Some("Invalid email address"));
}

#[test]
fn email_rejects_missing_domain_segment() {
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn email_empty_reports_required() {
    assert_eq!(email_error(""), Some("Email is required"));
}

// =============================================================
// Password requirements
// =============================================================

#[test]
fn strong_password_meets_requirements() {
    let checks = PasswordChecks::evaluate("Sup3r$ecret", "Sup3r$ecret");
    assert!(checks.meets_requirements());
    assert!(checks.matches);
}

#[test]
fn short_password_fails_length_only() {
    let checks = PasswordChecks::evaluate("Ab1!", "");
    assert!(!checks.min_length);
    assert!(checks.uppercase && checks.lowercase && checks.digit && checks.special);
    assert!(!checks.meets_requirements());
}

#[test]
fn password_without_special_character_fails() {
    assert!(!password_meets_requirements("Password123"));
}

#[test]
fn password_without_uppercase_fails() {
    assert!(!password_meets_requirements("password1!"));
}

#[test]
fn confirmation_must_match_byte_for_byte() {
    assert!(!PasswordChecks::evaluate("Passw0rd!", "passw0rd!").matches);
    assert!(!PasswordChecks::evaluate("Passw0rd!", "Passw0rd! ").matches);
    assert!(PasswordChecks::evaluate("Passw0rd!", "Passw0rd!").matches);
}

#[test]
fn empty_confirmation_never_matches() {
    assert!(!PasswordChecks::evaluate("", "").matches);
}

#[test]
fn match_does_not_affect_requirements() {
    let checks = PasswordChecks::evaluate("Passw0rd!", "other");
    assert!(checks.meets_requirements());
    assert!(!checks.matches);
}

#[test]
fn rows_follow_display_order() {
    let rows = PasswordChecks::evaluate("abc", "").rows();
    assert_eq!(rows[0].0, "At least 8 characters");
    assert_eq!(rows[5], ("Passwords match", false));
    assert!(rows[2].1);
}
