//! Auth endpoints and the REST-backed [`AuthBackend`].
//!
//! `POST /auth/login`, `GET /auth/me`, `POST /auth/logout`. HTTP failures are
//! folded into [`AuthError`] here so the session store never sees raw
//! status codes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde_json::Value;

use super::client::ApiClient;
use super::error::ApiError;
use crate::auth::{AuthBackend, AuthError, Credentials, LoginResponse, UserProfile};

const LOGIN_PATH: &[&str] = &["auth", "login"];
const ME_PATH: &[&str] = &["auth", "me"];
const LOGOUT_PATH: &[&str] = &["auth", "logout"];

/// `POST /auth/login`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    client.post(LOGIN_PATH, credentials).await
}

/// `GET /auth/me` with an explicit token.
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn current_user(client: &ApiClient, token: &str) -> Result<UserProfile, ApiError> {
    client.get_with_token(ME_PATH, token).await
}

/// `POST /auth/logout`
///
/// # Errors
///
/// Propagates the request's [`ApiError`] unchanged.
pub async fn logout(client: &ApiClient, token: &str) -> Result<(), ApiError> {
    let _: Value = client
        .post_with_token(LOGOUT_PATH, &Value::Null, token)
        .await?;
    Ok(())
}

fn login_error(error: ApiError) -> AuthError {
    match error {
        ApiError::Unauthorized | ApiError::BadRequest { status: 400, .. } => AuthError::InvalidCredentials,
        other => transport_error(other),
    }
}

fn session_error(error: ApiError) -> AuthError {
    match error {
        ApiError::Unauthorized => AuthError::ExpiredToken,
        other => transport_error(other),
    }
}

fn transport_error(error: ApiError) -> AuthError {
    match error {
        ApiError::Network(message) => AuthError::Network(message),
        other => AuthError::Server(other.to_string()),
    }
}

/// [`AuthBackend`] over the REST API. Keeps the shared client's bearer token
/// in sync with the session.
#[derive(Clone, Debug)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl AuthBackend for AuthApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError> {
        login(&self.client, credentials).await.map_err(login_error)
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile, AuthError> {
        current_user(&self.client, token)
            .await
            .map_err(session_error)
    }

    async fn logout(&self, token: &str) -> Result<(), AuthError> {
        logout(&self.client, token).await.map_err(transport_error)
    }

    fn attach_token(&self, token: Option<&str>) {
        self.client.set_token(token);
    }
}
