use super::*;

#[test]
fn active_status_serializes_camel_case() {
    let body = serde_json::to_value(StatusUpdate::Active { is_active: false }).unwrap();
    assert_eq!(body, serde_json::json!({ "isActive": false }));
}
