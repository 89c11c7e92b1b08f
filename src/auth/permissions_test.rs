use std::collections::BTreeSet;

use super::*;
use crate::auth::types::{Action, PrisonRef, Resource};

// =============================================================================
// Helpers
// =============================================================================

fn user(role: Role, permissions: &[Permission], prison: Option<&str>) -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        username: Some("tester".to_owned()),
        full_name: None,
        email: None,
        role_name: role,
        permissions: permissions.iter().cloned().collect::<BTreeSet<_>>(),
        prison: prison.map(|id| PrisonRef { id: id.to_owned(), name: None }),
    }
}

fn super_admin() -> UserProfile {
    user(Role::SuperAdmin, &[], None)
}

fn officer_with_prison(prison_id: &str) -> UserProfile {
    user(
        Role::Other("officer".to_owned()),
        &[Permission::new(Resource::Visits, Action::Read)],
        Some(prison_id),
    )
}

fn every_known_permission() -> Vec<Permission> {
    Resource::ALL
        .into_iter()
        .flat_map(|resource| Action::ALL.map(|action| Permission::new(resource, action)))
        .collect()
}

// =============================================================================
// has_permission
// =============================================================================

#[test]
fn super_admin_holds_every_permission() {
    let admin = super_admin();
    for permission in every_known_permission() {
        assert!(has_permission(Some(&admin), &permission), "missing {permission}");
    }
    assert!(has_permission(Some(&admin), &Permission::Other("anything".to_owned())));
}

#[test]
fn has_permission_checks_membership() {
    let officer = officer_with_prison("P1");
    assert!(has_permission(Some(&officer), &Permission::new(Resource::Visits, Action::Read)));
    assert!(!has_permission(Some(&officer), &Permission::new(Resource::Visits, Action::Delete)));
}

#[test]
fn prison_admin_is_not_a_wildcard() {
    let admin = user(Role::PrisonAdmin, &[], Some("P1"));
    assert!(!has_permission(Some(&admin), &Permission::new(Resource::Prisons, Action::Read)));
}

// =============================================================================
// has_any_permission / has_all_permissions
// =============================================================================

#[test]
fn empty_lists_follow_vacuous_truth() {
    let officer = officer_with_prison("P1");
    assert!(has_all_permissions(Some(&officer), &[]));
    assert!(!has_any_permission(Some(&officer), &[]));
    assert!(has_all_permissions(Some(&super_admin()), &[]));
    assert!(!has_any_permission(Some(&super_admin()), &[]));
}

#[test]
fn any_and_all_combine_membership() {
    let officer = officer_with_prison("P1");
    let read = Permission::new(Resource::Visits, Action::Read);
    let delete = Permission::new(Resource::Visits, Action::Delete);

    assert!(has_any_permission(Some(&officer), &[delete.clone(), read.clone()]));
    assert!(!has_all_permissions(Some(&officer), &[delete.clone(), read.clone()]));
    assert!(has_all_permissions(Some(&officer), &[read]));
    assert!(!has_any_permission(Some(&officer), &[delete]));
}

// =============================================================================
// Roles
// =============================================================================

#[test]
fn role_predicates_compare_role_name() {
    let admin = user(Role::PrisonAdmin, &[], Some("P1"));
    assert!(is_prison_admin(Some(&admin)));
    assert!(!is_super_admin(Some(&admin)));
    assert!(has_role(Some(&admin), &Role::PrisonAdmin));
    assert!(has_any_role(Some(&admin), &[Role::SuperAdmin, Role::PrisonAdmin]));
    assert!(!has_any_role(Some(&admin), &[]));
    assert!(is_super_admin(Some(&super_admin())));
}

#[test]
fn custom_roles_compare_by_name() {
    let officer = officer_with_prison("P1");
    assert!(has_role(Some(&officer), &Role::from("officer")));
    assert!(!has_role(Some(&officer), &Role::from("Officer")));
}

// =============================================================================
// can_access_prison
// =============================================================================

#[test]
fn prison_access_requires_assignment_or_super_admin() {
    let officer = officer_with_prison("P1");
    assert!(can_access_prison(Some(&officer), "P1"));
    assert!(!can_access_prison(Some(&officer), "P2"));
    assert!(can_access_prison(Some(&super_admin()), "P2"));
}

#[test]
fn unassigned_user_cannot_access_any_prison() {
    let floating = user(Role::PrisonAdmin, &[], None);
    assert!(!can_access_prison(Some(&floating), "P1"));
}

// =============================================================================
// Absent user
// =============================================================================

#[test]
fn absent_user_fails_every_predicate() {
    let read = Permission::new(Resource::Prisons, Action::Read);
    assert!(!has_permission(None, &read));
    assert!(!has_any_permission(None, &[read.clone()]));
    assert!(!has_any_permission(None, &[]));
    assert!(!has_all_permissions(None, &[read]));
    assert!(!has_all_permissions(None, &[]));
    assert!(!has_role(None, &Role::SuperAdmin));
    assert!(!has_any_role(None, &[Role::SuperAdmin, Role::PrisonAdmin]));
    assert!(!is_super_admin(None));
    assert!(!is_prison_admin(None));
    assert!(!can_access_prison(None, "P1"));
}
