use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user_id.is_none());
    assert!(!state.is_logged_in());
}

#[test]
fn auth_state_default_is_resolving() {
    let state = AuthState::default();
    assert!(state.loading);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolved_with_user_is_logged_in() {
    let state = AuthState::resolved(Some("u1".to_owned()));
    assert!(!state.loading);
    assert!(state.is_logged_in());
    assert_eq!(state.user_id.as_deref(), Some("u1"));
}

#[test]
fn resolved_without_user_is_logged_out() {
    let state = AuthState::resolved(None);
    assert!(!state.loading);
    assert!(!state.is_logged_in());
}
