//! Back-office user accounts: `/users`.
//!
//! Account activation is a separate `PATCH /users/{id}/status` so that
//! disabling someone never goes through the full-record `PUT`.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{ListQuery, StatusUpdate};

const COLLECTION: &str = "users";
const STATUS: &str = "status";

/// `GET /users`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn list_users(client: &ApiClient, query: &ListQuery) -> Result<Value, ApiError> {
    client.get_query(&[COLLECTION], query).await
}

/// `GET /users/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn get_user(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.get(&[COLLECTION, id]).await
}

/// `POST /users`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn create_user(client: &ApiClient, body: &Value) -> Result<Value, ApiError> {
    client.post(&[COLLECTION], body).await
}

/// `PUT /users/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn update_user(client: &ApiClient, id: &str, body: &Value) -> Result<Value, ApiError> {
    client.put(&[COLLECTION, id], body).await
}

/// `DELETE /users/{id}`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn delete_user(client: &ApiClient, id: &str) -> Result<Value, ApiError> {
    client.delete(&[COLLECTION, id]).await
}

/// Activate or deactivate an account: `PATCH /users/{id}/status`.
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn set_user_active(client: &ApiClient, id: &str, is_active: bool) -> Result<Value, ApiError> {
    client
        .patch(&[COLLECTION, id, STATUS], &StatusUpdate::Active { is_active })
        .await
}
