use super::*;
use crate::auth::types::{Role, UserProfile};

fn user() -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        username: None,
        full_name: None,
        email: None,
        role_name: Role::PrisonAdmin,
        permissions: std::collections::BTreeSet::new(),
        prison: None,
    }
}

// =============================================================================
// classify
// =============================================================================

#[test]
fn login_is_the_only_public_route() {
    assert_eq!(classify("/login"), Some(RouteClass::Public));
    assert_eq!(classify("/dashboard"), Some(RouteClass::Protected));
    assert_eq!(classify("/"), Some(RouteClass::Protected));
    assert_eq!(classify("/login/help"), Some(RouteClass::Protected));
}

#[test]
fn classify_ignores_query_fragment_and_trailing_slash() {
    assert_eq!(classify("/login/"), Some(RouteClass::Public));
    assert_eq!(classify("/login?next=/visits"), Some(RouteClass::Public));
    assert_eq!(classify("/login#form"), Some(RouteClass::Public));
}

#[test]
fn classify_rejects_relative_paths() {
    assert_eq!(classify("login"), None);
    assert_eq!(classify(""), None);
}

// =============================================================================
// decide
// =============================================================================

#[test]
fn loading_always_shows_placeholder() {
    assert_eq!(decide(SessionStatus::Loading, "/login"), GuardDecision::Placeholder);
    assert_eq!(decide(SessionStatus::Loading, "/dashboard"), GuardDecision::Placeholder);
    assert_eq!(decide(SessionStatus::Loading, "nonsense"), GuardDecision::Placeholder);
}

#[test]
fn unauthenticated_on_login_renders() {
    assert_eq!(decide(SessionStatus::Unauthenticated, "/login"), GuardDecision::Render);
}

#[test]
fn unauthenticated_on_protected_redirects_to_login() {
    let decision = decide(SessionStatus::Unauthenticated, "/dashboard");
    assert_eq!(decision, GuardDecision::Redirect("/login"));
    assert!(!decision.renders_content());
}

#[test]
fn authenticated_on_login_redirects_to_dashboard() {
    assert_eq!(decide(SessionStatus::Authenticated, "/login"), GuardDecision::Redirect("/dashboard"));
}

#[test]
fn authenticated_on_protected_renders() {
    assert_eq!(decide(SessionStatus::Authenticated, "/visits"), GuardDecision::Render);
}

#[test]
fn unclassifiable_path_fails_closed() {
    assert_eq!(decide(SessionStatus::Authenticated, "visits"), GuardDecision::Blank);
    assert_eq!(decide(SessionStatus::Unauthenticated, ""), GuardDecision::Blank);
    assert!(!GuardDecision::Blank.renders_content());
}

// =============================================================================
// RouteGuard
// =============================================================================

#[test]
fn guard_re_evaluates_on_navigation() {
    let (_tx, rx) = watch::channel(Session::unauthenticated());
    let mut guard = RouteGuard::new(rx, "/dashboard");
    assert_eq!(guard.evaluate(), GuardDecision::Redirect("/login"));
    assert_eq!(guard.navigate("/login"), GuardDecision::Render);
    assert_eq!(guard.path(), "/login");
}

#[test]
fn guard_settles_after_redirect() {
    let (_tx, rx) = watch::channel(Session::authenticated(user(), "t"));
    let mut guard = RouteGuard::new(rx, "/login");
    assert_eq!(guard.settle(), GuardDecision::Render);
    assert_eq!(guard.path(), "/dashboard");
}

#[tokio::test]
async fn guard_follows_session_transitions() {
    let (tx, rx) = watch::channel(Session::default());
    let mut guard = RouteGuard::new(rx, "/visits");
    assert_eq!(guard.evaluate(), GuardDecision::Placeholder);

    tx.send_replace(Session::authenticated(user(), "t"));
    assert_eq!(guard.changed().await, Some(GuardDecision::Render));

    tx.send_replace(Session::unauthenticated());
    assert_eq!(guard.changed().await, Some(GuardDecision::Redirect("/login")));

    drop(tx);
    assert_eq!(guard.changed().await, None);
}
