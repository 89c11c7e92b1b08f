//! Permission predicates over an optional signed-in user.
//!
//! Every predicate is total: an absent user yields `false`, never a panic.
//! A `SuperAdmin` role is an implicit wildcard for permission checks and
//! prison access.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use super::types::{Permission, Role, UserProfile};

/// `true` if the user holds `permission` or is a super admin.
#[must_use]
pub fn has_permission(user: Option<&UserProfile>, permission: &Permission) -> bool {
    user.is_some_and(|user| user.role_name == Role::SuperAdmin || user.permissions.contains(permission))
}

/// `true` if any permission in the list passes [`has_permission`]. Empty list is `false`.
#[must_use]
pub fn has_any_permission(user: Option<&UserProfile>, permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .any(|permission| has_permission(user, permission))
}

/// `true` if every permission in the list passes [`has_permission`].
///
/// An empty list is vacuously satisfied for a present user.
#[must_use]
pub fn has_all_permissions(user: Option<&UserProfile>, permissions: &[Permission]) -> bool {
    user.is_some()
        && permissions
            .iter()
            .all(|permission| has_permission(user, permission))
}

#[must_use]
pub fn has_role(user: Option<&UserProfile>, role: &Role) -> bool {
    user.is_some_and(|user| user.role_name == *role)
}

#[must_use]
pub fn has_any_role(user: Option<&UserProfile>, roles: &[Role]) -> bool {
    roles.iter().any(|role| has_role(user, role))
}

#[must_use]
pub fn is_super_admin(user: Option<&UserProfile>) -> bool {
    has_role(user, &Role::SuperAdmin)
}

#[must_use]
pub fn is_prison_admin(user: Option<&UserProfile>) -> bool {
    has_role(user, &Role::PrisonAdmin)
}

/// `true` if the user is a super admin or is assigned to `prison_id`.
#[must_use]
pub fn can_access_prison(user: Option<&UserProfile>, prison_id: &str) -> bool {
    user.is_some_and(|user| {
        user.role_name == Role::SuperAdmin
            || user
                .prison
                .as_ref()
                .is_some_and(|prison| prison.id == prison_id)
    })
}
