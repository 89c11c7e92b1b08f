//! Inmate work assignments and hours: `/work-records`.

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::ListQuery;

const COLLECTION: &str = "work-records";

/// `GET /work-records`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn list_work_records(client: &ApiClient, query: &ListQuery) -> Result<Value, ApiError> {
    client.get_query(&[COLLECTION], query).await
}

/// `GET /work-records/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn get_work_record(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.get(&[COLLECTION, id]).await
}

/// `POST /work-records`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn create_work_record(client: &ApiClient, body: &Value) -> Result<Value, ApiError> {
    client.post(&[COLLECTION], body).await
}

/// `PUT /work-records/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn update_work_record(client: &ApiClient, id: &str, body: &Value) -> Result<Value, ApiError> {
    client.put(&[COLLECTION, id], body).await
}

/// `DELETE /work-records/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn delete_work_record(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.delete(&[COLLECTION, id]).await
}
