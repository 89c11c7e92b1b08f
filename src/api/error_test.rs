use super::*;

#[test]
fn from_status_maps_distinguished_codes() {
    assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
    assert_eq!(ApiError::from_status(403, "nope"), ApiError::Forbidden);
    assert_eq!(ApiError::from_status(404, ""), ApiError::NotFound);
}

#[test]
fn from_status_other_client_errors_are_bad_requests() {
    assert_eq!(
        ApiError::from_status(422, r#"{"message":"capacity must be positive"}"#),
        ApiError::BadRequest { status: 422, message: "capacity must be positive".to_owned() }
    );
    assert_eq!(
        ApiError::from_status(400, r#"{"error":"missing name"}"#),
        ApiError::BadRequest { status: 400, message: "missing name".to_owned() }
    );
}

#[test]
fn from_status_server_errors_keep_plain_body() {
    assert_eq!(
        ApiError::from_status(502, "  upstream down \n"),
        ApiError::Server { status: 502, message: "upstream down".to_owned() }
    );
}

#[test]
fn status_reports_response_codes_only() {
    assert_eq!(ApiError::Forbidden.status(), Some(403));
    assert_eq!(ApiError::from_status(500, "").status(), Some(500));
    assert_eq!(ApiError::Network("reset".to_owned()).status(), None);
}

#[test]
fn only_401_is_unauthorized() {
    assert!(ApiError::Unauthorized.is_unauthorized());
    assert!(!ApiError::Forbidden.is_unauthorized());
}
