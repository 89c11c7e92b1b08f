//! Dashboard pages, their routes and what each one requires.
//!
//! SYSTEM CONTEXT
//! ==============
//! The binary maps every command onto one of these pages, runs the route
//! guard for its path, then checks the page's permission for the requested
//! action through [`UserPermissions`].

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use serde::Serialize;

use crate::auth::{Action, DEFAULT_LANDING_PATH, LOGIN_PATH, Permission, Resource, UserPermissions};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Dashboard,
    Prisons,
    Users,
    Visitors,
    Visits,
    WorkRecords,
    BehaviourRecords,
}

impl Page {
    pub const ALL: [Self; 8] = [
        Self::Login,
        Self::Dashboard,
        Self::Prisons,
        Self::Users,
        Self::Visitors,
        Self::Visits,
        Self::WorkRecords,
        Self::BehaviourRecords,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => DEFAULT_LANDING_PATH,
            Self::Prisons => "/prisons",
            Self::Users => "/users",
            Self::Visitors => "/visitors",
            Self::Visits => "/visits",
            Self::WorkRecords => "/work-records",
            Self::BehaviourRecords => "/behaviour-records",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Dashboard => "Dashboard",
            Self::Prisons => "Prisons",
            Self::Users => "Users",
            Self::Visitors => "Visitors",
            Self::Visits => "Visits",
            Self::WorkRecords => "Work records",
            Self::BehaviourRecords => "Behaviour records",
        }
    }

    /// Resource whose records the page manages, if any.
    #[must_use]
    pub const fn resource(self) -> Option<Resource> {
        match self {
            Self::Login | Self::Dashboard => None,
            Self::Prisons => Some(Resource::Prisons),
            Self::Users => Some(Resource::Users),
            Self::Visitors => Some(Resource::Visitors),
            Self::Visits => Some(Resource::Visits),
            Self::WorkRecords => Some(Resource::WorkRecords),
            Self::BehaviourRecords => Some(Resource::BehaviourRecords),
        }
    }

    /// Page for a path, ignoring query string and trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|page| page.path() == path)
    }

    /// Permission needed to perform `action` on this page; `None` when the
    /// page has no resource behind it.
    #[must_use]
    pub fn required_permission(self, action: Action) -> Option<Permission> {
        self.resource()
            .map(|resource| Permission::new(resource, action))
    }

    /// Whether `perms` may perform `action` here.
    #[must_use]
    pub fn allows(self, perms: &UserPermissions, action: Action) -> bool {
        match self.required_permission(action) {
            Some(permission) => perms.has_permission(&permission),
            None => perms.user().is_some(),
        }
    }
}

/// A navigation entry shown to the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub path: &'static str,
    pub title: &'static str,
}

/// Pages the user may open, in menu order. Empty when signed out.
#[must_use]
pub fn visible_pages(perms: &UserPermissions) -> Vec<MenuItem> {
    Page::ALL
        .into_iter()
        .filter(|page| *page != Page::Login)
        .filter(|page| page.allows(perms, Action::Read))
        .map(|page| MenuItem { path: page.path(), title: page.title() })
        .collect()
}

/// Why a prison-scoped listing was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    #[error("prison {0} is outside your assignment")]
    OutsideAssignment(String),
    #[error("no prison is assigned to your account")]
    Unassigned,
}

/// Resolve which prison a listing should be filtered to.
///
/// Super admins see whatever they ask for (all prisons when `requested` is
/// `None`). Everyone else is pinned to their assigned prison; asking for a
/// different one is refused, and so is listing without an assignment.
///
/// # Errors
///
/// Returns [`ScopeError::OutsideAssignment`] when a non-super-admin requests a
/// prison they cannot access, and [`ScopeError::Unassigned`] when they have no
/// prison to be pinned to.
pub fn prison_scope(perms: &UserPermissions, requested: Option<&str>) -> Result<Option<String>, ScopeError> {
    if perms.is_super_admin() {
        return Ok(requested.map(str::to_owned));
    }
    match requested {
        Some(prison_id) if perms.can_access_prison(prison_id) => Ok(Some(prison_id.to_owned())),
        Some(prison_id) => Err(ScopeError::OutsideAssignment(prison_id.to_owned())),
        None => perms
            .assigned_prison()
            .map(str::to_owned)
            .map(Some)
            .ok_or(ScopeError::Unassigned),
    }
}
