use super::*;

fn ada() -> User {
    User { id: "u1".to_owned(), email: "ada@example.com".to_owned(), display_name: None }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn resolve_replaces_user_and_clears_loading() {
    let mut state = AuthState::pending();
    state.resolve(Some(ada()));
    assert_eq!(state.user, Some(ada()));
    assert!(!state.loading);

    state.resolve(None);
    assert!(state.user.is_none());
}
