use super::*;

#[test]
fn named_status_serializes_as_status_field() {
    let body = serde_json::to_value(StatusUpdate::Named { status: "approved".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "approved" }));
}
