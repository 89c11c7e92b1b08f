use super::*;
use serde_json::json;

// =============================================================================
// Permission
// =============================================================================

#[test]
fn permission_parses_known_pairs() {
    assert_eq!(Permission::parse("visits:create"), Permission::new(Resource::Visits, Action::Create));
    assert_eq!(
        Permission::parse("behaviour_records:delete"),
        Permission::new(Resource::BehaviourRecords, Action::Delete)
    );
}

#[test]
fn permission_keeps_unknown_strings_verbatim() {
    assert_eq!(Permission::parse("reports:export"), Permission::Other("reports:export".to_owned()));
    assert_eq!(Permission::parse("prisons"), Permission::Other("prisons".to_owned()));
    assert_eq!(Permission::parse("prisons:approve"), Permission::Other("prisons:approve".to_owned()));
}

#[test]
fn permission_display_matches_wire_format() {
    assert_eq!(Permission::new(Resource::WorkRecords, Action::Read).to_string(), "work_records:read");
    assert_eq!(Permission::Other("custom".to_owned()).to_string(), "custom");
}

#[test]
fn permission_serializes_as_string() {
    let value = serde_json::to_value(Permission::new(Resource::Users, Action::Update)).unwrap();
    assert_eq!(value, json!("users:update"));
}

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_parses_distinguished_names() {
    assert_eq!(Role::parse("super_admin"), Role::SuperAdmin);
    assert_eq!(Role::parse("prison_admin"), Role::PrisonAdmin);
    assert_eq!(Role::parse("officer"), Role::Other("officer".to_owned()));
}

#[test]
fn role_parse_is_case_sensitive() {
    assert_eq!(Role::parse("SUPER_ADMIN"), Role::Other("SUPER_ADMIN".to_owned()));
}

// =============================================================================
// UserProfile
// =============================================================================

#[test]
fn user_profile_deserializes_camel_case_payload() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": "u-1",
        "username": "warden",
        "fullName": "Dana Reyes",
        "roleName": "prison_admin",
        "permissions": ["visits:read", "visits:create", "reports:export"],
        "prison": { "id": "P1", "name": "North Block" }
    }))
    .unwrap();

    assert_eq!(user.id, "u-1");
    assert_eq!(user.role_name, Role::PrisonAdmin);
    assert_eq!(user.display_name(), "Dana Reyes");
    assert!(user.permissions.contains(&Permission::new(Resource::Visits, Action::Create)));
    assert!(user.permissions.contains(&Permission::Other("reports:export".to_owned())));
    assert_eq!(user.prison, Some(PrisonRef { id: "P1".to_owned(), name: Some("North Block".to_owned()) }));
}

#[test]
fn user_profile_accepts_numeric_ids_and_bare_prison_reference() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": 42,
        "roleName": "officer",
        "prison": 7
    }))
    .unwrap();

    assert_eq!(user.id, "42");
    assert!(user.permissions.is_empty());
    assert_eq!(user.prison, Some(PrisonRef { id: "7".to_owned(), name: None }));
    assert_eq!(user.display_name(), "42");
}

#[test]
fn user_profile_null_prison_is_absent() {
    let user: UserProfile = serde_json::from_value(json!({
        "id": "u-2",
        "roleName": "super_admin",
        "prison": null
    }))
    .unwrap();
    assert_eq!(user.prison, None);
}

#[test]
fn login_response_accepts_access_token_alias() {
    let response: LoginResponse = serde_json::from_value(json!({
        "accessToken": "abc",
        "user": { "id": "u-1", "roleName": "super_admin" }
    }))
    .unwrap();
    assert_eq!(response.token, "abc");
}

#[test]
fn credentials_debug_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("admin", "hunter2"));
    assert!(rendered.contains("admin"));
    assert!(!rendered.contains("hunter2"));
}

// =============================================================================
// Session
// =============================================================================

#[test]
fn default_session_is_loading() {
    let session = Session::default();
    assert_eq!(session.status(), SessionStatus::Loading);
    assert!(!session.is_authenticated());
}

#[test]
fn session_without_token_is_unauthenticated() {
    let user: UserProfile = serde_json::from_value(json!({ "id": "u", "roleName": "officer" })).unwrap();
    let session = Session { user: Some(user), token: None, loading: false, generation: 0 };
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
}
