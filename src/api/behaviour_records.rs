//! Inmate behaviour incidents and commendations: `/behaviour-records`.
//!
//! Record bodies are passed through as JSON; the API owns their shape.

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::ListQuery;

const COLLECTION: &str = "behaviour-records";

/// `GET /behaviour-records`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn list_behaviour_records(client: &ApiClient, query: &ListQuery) -> Result<Value, ApiError> {
    client.get_query(&[COLLECTION], query).await
}

/// `GET /behaviour-records/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn get_behaviour_record(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.get(&[COLLECTION, id]).await
}

/// `POST /behaviour-records`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn create_behaviour_record(client: &ApiClient, body: &Value) -> Result<Value, ApiError> {
    client.post(&[COLLECTION], body).await
}

/// `PUT /behaviour-records/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn update_behaviour_record(client: &ApiClient, id: &str, body: &Value) -> Result<Value, ApiError> {
    client.put(&[COLLECTION, id], body).await
}

/// `DELETE /behaviour-records/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn delete_behaviour_record(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.delete(&[COLLECTION, id]).await
}
