//! Route guard: decides render vs. redirect for the current path.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page of the dashboard shell goes through [`RouteGuard`] before it
//! renders. The guard is a UX gate only; the backing API must still reject
//! unauthorized requests on its own.
//!
//! The decision is recomputed from `(session status, path)` on every
//! evaluation. Nothing is cached, so a session transition is reflected on the
//! next call.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use tokio::sync::watch;

use super::types::{Session, SessionStatus};

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

const PUBLIC_ROUTES: &[&str] = &[LOGIN_PATH];

/// Whether a path requires a signed-in session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
}

/// What the shell should do for the current `(session, path)` pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving; show a loading placeholder and stay put.
    Placeholder,
    /// Navigate to the given path and render nothing meanwhile.
    Redirect(&'static str),
    /// Render the requested page.
    Render,
    /// No decision could be made; render nothing.
    Blank,
}

impl GuardDecision {
    /// Only [`GuardDecision::Render`] may show page content.
    #[must_use]
    pub fn renders_content(self) -> bool {
        matches!(self, Self::Render)
    }
}

/// Strip query string, fragment and trailing slash. `None` for paths that do
/// not start with `/`.
fn normalize_path(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    if !path.starts_with('/') {
        return None;
    }
    let trimmed = path.trim_end_matches('/');
    Some(if trimmed.is_empty() { "/" } else { trimmed })
}

/// Classify a path against the static public allow-list.
#[must_use]
pub fn classify(path: &str) -> Option<RouteClass> {
    let path = normalize_path(path)?;
    if PUBLIC_ROUTES.contains(&path) {
        Some(RouteClass::Public)
    } else {
        Some(RouteClass::Protected)
    }
}

/// Pure guard decision for a session status and a path.
#[must_use]
pub fn decide(status: SessionStatus, path: &str) -> GuardDecision {
    if status == SessionStatus::Loading {
        return GuardDecision::Placeholder;
    }
    let Some(class) = classify(path) else {
        return GuardDecision::Blank;
    };
    let is_login = normalize_path(path) == Some(LOGIN_PATH);

    match (status, class) {
        (SessionStatus::Unauthenticated, RouteClass::Protected) => GuardDecision::Redirect(LOGIN_PATH),
        (SessionStatus::Authenticated, RouteClass::Public) if is_login => {
            GuardDecision::Redirect(DEFAULT_LANDING_PATH)
        }
        (SessionStatus::Unauthenticated | SessionStatus::Authenticated, _) => GuardDecision::Render,
        (SessionStatus::Loading, _) => GuardDecision::Placeholder,
    }
}

/// Guard bound to a live session feed and the current navigation path.
#[derive(Debug)]
pub struct RouteGuard {
    session: watch::Receiver<Session>,
    path: String,
}

impl RouteGuard {
    #[must_use]
    pub fn new(session: watch::Receiver<Session>, path: impl Into<String>) -> Self {
        Self { session, path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Record a navigation and return the decision for the new path.
    pub fn navigate(&mut self, path: impl Into<String>) -> GuardDecision {
        self.path = path.into();
        let decision = self.evaluate();
        tracing::debug!(path = %self.path, ?decision, "route guard evaluated navigation");
        decision
    }

    /// Decision for the latest session snapshot and the current path.
    #[must_use]
    pub fn evaluate(&self) -> GuardDecision {
        let status = self.session.borrow().status();
        decide(status, &self.path)
    }

    /// Wait for the next session transition, then re-evaluate.
    ///
    /// Returns `None` once the session store has been dropped.
    pub async fn changed(&mut self) -> Option<GuardDecision> {
        self.session.changed().await.ok()?;
        let status = self.session.borrow_and_update().status();
        Some(decide(status, &self.path))
    }

    /// Follow redirects until the guard settles on a non-redirect decision.
    ///
    /// Redirect targets are fixed routes, so this terminates after at most one
    /// hop per target.
    pub fn settle(&mut self) -> GuardDecision {
        let mut decision = self.evaluate();
        for _ in 0..PUBLIC_ROUTES.len() + 1 {
            let GuardDecision::Redirect(target) = decision else {
                break;
            };
            decision = self.navigate(target);
        }
        decision
    }
}
