use std::collections::BTreeSet;

use super::*;
use crate::auth::types::PrisonRef;

fn officer() -> UserProfile {
    UserProfile {
        id: "u-7".to_owned(),
        username: Some("officer7".to_owned()),
        full_name: None,
        email: None,
        role_name: Role::from("officer"),
        permissions: BTreeSet::from([
            Permission::new(Resource::Visits, Action::Read),
            Permission::new(Resource::Visits, Action::Create),
        ]),
        prison: Some(PrisonRef { id: "P1".to_owned(), name: None }),
    }
}

#[test]
fn bound_user_answers_predicates() {
    let perms = UserPermissions::new(Some(officer()));
    assert!(perms.can(Resource::Visits, Action::Create));
    assert!(!perms.can(Resource::Visits, Action::Delete));
    assert!(perms.has_role(&Role::from("officer")));
    assert!(!perms.is_super_admin());
    assert!(perms.can_access_prison("P1"));
    assert!(!perms.can_access_prison("P2"));
    assert_eq!(perms.assigned_prison(), Some("P1"));
}

#[test]
fn from_session_ignores_user_while_loading() {
    let session = Session { user: Some(officer()), token: Some("t".to_owned()), loading: true, generation: 0 };
    let perms = UserPermissions::from_session(&session);
    assert!(perms.user().is_none());
    assert!(!perms.can(Resource::Visits, Action::Read));
}

#[test]
fn from_session_binds_authenticated_user() {
    let perms = UserPermissions::from_session(&Session::authenticated(officer(), "t"));
    assert_eq!(perms.user().map(|user| user.id.as_str()), Some("u-7"));
    assert!(perms.has_any_permission(&[Permission::new(Resource::Visits, Action::Read)]));
    assert!(perms.has_all_permissions(&[]));
}

#[test]
fn default_facade_denies_everything() {
    let perms = UserPermissions::default();
    assert!(!perms.has_all_permissions(&[]));
    assert!(!perms.has_any_role(&[Role::SuperAdmin]));
    assert!(!perms.is_prison_admin());
    assert_eq!(perms.assigned_prison(), None);
}
