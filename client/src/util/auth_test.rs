use super::*;

#[test]
fn should_redirect_unauth_when_resolved_and_user_missing() {
    let state = AuthState::resolved(None);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_resolving() {
    let state = AuthState::default();
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState::resolved(Some("u1".to_owned()));
    assert!(!should_redirect_unauth(&state));
}
