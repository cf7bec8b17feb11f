use super::*;

fn member() -> User {
    User {
        id: 3,
        email: "jane@example.com".to_owned(),
        role: Role::User,
        first_name: Some("Jane".to_owned()),
        last_name: Some("Doe".to_owned()),
    }
}

// =============================================================
// Protected route matrix
// =============================================================

#[test]
fn protected_route_waits_while_loading() {
    assert_eq!(protected_outcome(true, false, false, false), GuardOutcome::Loading);
    assert_eq!(protected_outcome(true, true, true, true), GuardOutcome::Loading);
}

#[test]
fn protected_route_redirects_unauthenticated_to_login() {
    assert_eq!(
        protected_outcome(false, false, false, false),
        GuardOutcome::RedirectLogin
    );
    assert_eq!(
        protected_outcome(false, false, false, true),
        GuardOutcome::RedirectLogin
    );
}

#[test]
fn protected_route_allows_authenticated_user() {
    assert_eq!(protected_outcome(false, true, false, false), GuardOutcome::Allow);
}

#[test]
fn admin_route_redirects_non_admin_to_dashboard() {
    assert_eq!(
        protected_outcome(false, true, false, true),
        GuardOutcome::RedirectDashboard
    );
}

#[test]
fn admin_route_allows_admin() {
    assert_eq!(protected_outcome(false, true, true, true), GuardOutcome::Allow);
}

// =============================================================
// Public route matrix
// =============================================================

#[test]
fn public_route_waits_while_loading() {
    assert_eq!(public_outcome(true, false), GuardOutcome::Loading);
}

#[test]
fn public_route_redirects_authenticated_to_dashboard() {
    assert_eq!(public_outcome(false, true), GuardOutcome::RedirectDashboard);
}

#[test]
fn public_route_allows_anonymous() {
    assert_eq!(public_outcome(false, false), GuardOutcome::Allow);
}

// =============================================================
// Restoration invariant: token implies user
// =============================================================

#[test]
fn restore_requires_both_token_and_user() {
    assert!(restored_pair(Some("tok".to_owned()), Some(member())).is_some());
    assert!(restored_pair(Some("tok".to_owned()), None).is_none());
    assert!(restored_pair(None, Some(member())).is_none());
    assert!(restored_pair(None, None).is_none());
}

// =============================================================
// Session signals
// =============================================================

#[test]
fn fresh_session_is_loading_and_anonymous() {
    let session = Session::new();
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert_eq!(session.guard(false), GuardOutcome::Loading);
}

#[test]
fn authenticated_iff_token_present() {
    let session = Session::new();
    session.restore();
    assert!(!session.is_authenticated());

    session.establish("tok-123", member());
    assert!(session.is_authenticated());
    assert!(!session.is_admin());
    assert_eq!(session.guard(false), GuardOutcome::Allow);
    assert_eq!(session.guard(true), GuardOutcome::RedirectDashboard);

    session.logout();
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
}

#[test]
fn admin_session_reaches_admin_routes() {
    let session = Session::new();
    session.restore();
    session.establish(
        "tok-456",
        User {
            role: Role::Admin,
            ..member()
        },
    );
    assert!(session.is_admin());
    assert_eq!(session.guard(true), GuardOutcome::Allow);
}

#[test]
fn restored_empty_session_redirects_to_login() {
    let session = Session::new();
    // Host storage is empty, so restore lands on the logged-out state.
    session.restore();
    assert!(!session.is_authenticated());
    assert_eq!(session.guard(false), GuardOutcome::RedirectLogin);
    assert_eq!(session.public_guard(), GuardOutcome::Allow);
}
