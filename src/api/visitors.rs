//! Registered visitors: `/visitors`.

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::ListQuery;

const COLLECTION: &str = "visitors";

/// `GET /visitors`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn list_visitors(client: &ApiClient, query: &ListQuery) -> Result<Value, ApiError> {
    client.get_query(&[COLLECTION], query).await
}

/// `GET /visitors/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn get_visitor(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.get(&[COLLECTION, id]).await
}

/// `POST /visitors`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn create_visitor(client: &ApiClient, body: &Value) -> Result<Value, ApiError> {
    client.post(&[COLLECTION], body).await
}

/// `PUT /visitors/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn update_visitor(client: &ApiClient, id: &str, body: &Value) -> Result<Value, ApiError> {
    client.put(&[COLLECTION, id], body).await
}

/// `DELETE /visitors/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn delete_visitor(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.delete(&[COLLECTION, id]).await
}
