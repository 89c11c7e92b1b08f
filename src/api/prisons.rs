//! Prison facilities: `/prisons`.
//!
//! Pass-through wrappers: each returns the decoded response body unchanged.

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::ListQuery;

const COLLECTION: &str = "prisons";

/// `GET /prisons`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn list_prisons(client: &ApiClient, query: &ListQuery) -> Result<Value, ApiError> {
    client.get_query(&[COLLECTION], query).await
}

/// `GET /prisons/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn get_prison(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.get(&[COLLECTION, id]).await
}

/// `POST /prisons`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn create_prison(client: &ApiClient, body: &Value) -> Result<Value, ApiError> {
    client.post(&[COLLECTION], body).await
}

/// `PUT /prisons/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn update_prison(client: &ApiClient, id: &str, body: &Value) -> Result<Value, ApiError> {
    client.put(&[COLLECTION, id], body).await
}

/// `DELETE /prisons/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn delete_prison(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.delete(&[COLLECTION, id]).await
}
