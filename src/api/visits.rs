//! Scheduled and past visits: `/visits`.
//!
//! Besides plain CRUD, a visit moves through a backend-defined status
//! workflow (e.g. `pending` → `approved` → `completed`) via
//! `PATCH /visits/{id}/status`. Status names are passed through unchecked.

#[cfg(test)]
#[path = "visits_test.rs"]
mod visits_test;

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{ListQuery, StatusUpdate};

const COLLECTION: &str = "visits";
const STATUS: &str = "status";

/// `GET /visits`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn list_visits(client: &ApiClient, query: &ListQuery) -> Result<Value, ApiError> {
    client.get_query(&[COLLECTION], query).await
}

/// `GET /visits/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn get_visit(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.get(&[COLLECTION, id]).await
}

/// `POST /visits`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn create_visit(client: &ApiClient, body: &Value) -> Result<Value, ApiError> {
    client.post(&[COLLECTION], body).await
}

/// `PUT /visits/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn update_visit(client: &ApiClient, id: &str, body: &Value) -> Result<Value, ApiError> {
    client.put(&[COLLECTION, id], body).await
}

/// `DELETE /visits/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn delete_visit(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.delete(&[COLLECTION, id]).await
}

/// `PATCH /visits/{id}/status`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn update_visit_status(client: &ApiClient, id: &str, status: &str) -> Result<Value, ApiError> {
    let body = StatusUpdate::Named { status: status.to_owned() };
    client.patch(&[COLLECTION, id, STATUS], &body).await
}
