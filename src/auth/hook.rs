//! Permission facade bound to the current session user.
//!
//! Pages take a [`UserPermissions`] from the session store and ask it what to
//! render instead of threading the user through every predicate call.

#[cfg(test)]
#[path = "hook_test.rs"]
mod hook_test;

use super::permissions;
use super::types::{Action, Permission, Resource, Role, Session, UserProfile};

/// Predicates from [`permissions`] bound to one user snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserPermissions {
    user: Option<UserProfile>,
}

impl UserPermissions {
    #[must_use]
    pub fn new(user: Option<UserProfile>) -> Self {
        Self { user }
    }

    /// Bind to the session's user. A session still loading has no user.
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let user = if session.is_authenticated() { session.user.clone() } else { None };
        Self { user }
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn has_permission(&self, permission: &Permission) -> bool {
        permissions::has_permission(self.user(), permission)
    }

    #[must_use]
    pub fn has_any_permission(&self, required: &[Permission]) -> bool {
        permissions::has_any_permission(self.user(), required)
    }

    #[must_use]
    pub fn has_all_permissions(&self, required: &[Permission]) -> bool {
        permissions::has_all_permissions(self.user(), required)
    }

    #[must_use]
    pub fn has_role(&self, role: &Role) -> bool {
        permissions::has_role(self.user(), role)
    }

    #[must_use]
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        permissions::has_any_role(self.user(), roles)
    }

    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        permissions::is_super_admin(self.user())
    }

    #[must_use]
    pub fn is_prison_admin(&self) -> bool {
        permissions::is_prison_admin(self.user())
    }

    #[must_use]
    pub fn can_access_prison(&self, prison_id: &str) -> bool {
        permissions::can_access_prison(self.user(), prison_id)
    }

    /// Shorthand for `has_permission(&Permission::new(resource, action))`.
    #[must_use]
    pub fn can(&self, resource: Resource, action: Action) -> bool {
        self.has_permission(&Permission::new(resource, action))
    }

    /// Prison the user is assigned to, if any.
    #[must_use]
    pub fn assigned_prison(&self) -> Option<&str> {
        self.user()?.prison.as_ref().map(|prison| prison.id.as_str())
    }
}
