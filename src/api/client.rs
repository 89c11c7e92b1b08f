//! Shared HTTP client for the back-office REST API.
//!
//! ARCHITECTURE
//! ============
//! One `reqwest::Client` per process, cloned into every wrapper. The bearer
//! token sits behind a shared lock so the session store can swap it on
//! sign-in/out without rebuilding the client.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError`] via [`ApiError::from_status`]; bodies
//! are returned as decoded JSON, untouched. No retries.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::ListQuery;
use crate::config::{DashboardConfig, HttpTimeouts};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// Build a client rooted at `base_url` (e.g. `https://host/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] unless `base_url` is an absolute
    /// URL that can carry a path, and [`ApiError::HttpClientBuild`] if the TLS
    /// backend fails to load.
    pub fn new(base_url: impl Into<String>, timeouts: HttpTimeouts) -> Result<Self, ApiError> {
        let raw = base_url.into();
        let base_url = Url::parse(raw.trim_end_matches('/'))
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{raw}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(raw));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .user_agent(concat!("wardenboard/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url, token: Arc::new(RwLock::new(None)) })
    }

    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn from_config(config: &DashboardConfig) -> Result<Self, ApiError> {
        Self::new(config.api_base_url.clone(), config.timeouts)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Absolute URL for `segments` below the base, e.g. `["prisons", id]`.
    /// Each segment is percent-encoded on its own, so ids may contain `/`.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Replace the bearer token sent with every request.
    pub fn set_token(&self, token: Option<&str>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token.map(str::to_owned);
    }

    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    // =========================================================================
    // VERBS
    // =========================================================================

    /// # Errors
    ///
    /// Returns the [`ApiError`] for the failed request.
    pub async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.execute(Method::GET, segments, |builder| builder, None).await
    }

    /// `GET` with list filters as query parameters.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] for the failed request.
    pub async fn get_query<T: DeserializeOwned>(&self, segments: &[&str], query: &ListQuery) -> Result<T, ApiError> {
        self.execute(Method::GET, segments, |builder| builder.query(query), None)
            .await
    }

    /// # Errors
    ///
    /// Returns the [`ApiError`] for the failed request.
    pub async fn post<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, segments, |builder| builder.json(body), None)
            .await
    }

    /// # Errors
    ///
    /// Returns the [`ApiError`] for the failed request.
    pub async fn put<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PUT, segments, |builder| builder.json(body), None)
            .await
    }

    /// # Errors
    ///
    /// Returns the [`ApiError`] for the failed request.
    pub async fn patch<T, B>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PATCH, segments, |builder| builder.json(body), None)
            .await
    }

    /// # Errors
    ///
    /// Returns the [`ApiError`] for the failed request.
    pub async fn delete<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.execute(Method::DELETE, segments, |builder| builder, None)
            .await
    }

    /// `GET` authorized with an explicit token instead of the shared one.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] for the failed request.
    pub async fn get_with_token<T: DeserializeOwned>(&self, segments: &[&str], token: &str) -> Result<T, ApiError> {
        self.execute(Method::GET, segments, |builder| builder, Some(token))
            .await
    }

    /// `POST` authorized with an explicit token instead of the shared one.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] for the failed request.
    pub async fn post_with_token<T, B>(&self, segments: &[&str], body: &B, token: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, segments, |builder| builder.json(body), Some(token))
            .await
    }

    async fn execute<T, F>(&self, method: Method, segments: &[&str], build: F, token: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.endpoint(segments);
        let mut builder = build(self.http.request(method.clone(), url.clone()));
        let bearer = token.map(str::to_owned).or_else(|| self.token());
        if let Some(bearer) = bearer {
            builder = builder.bearer_auth(bearer);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::debug!(%method, path = url.path(), error = %e, "api request did not complete");
            ApiError::Network(e.to_string())
        })?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !(200..300).contains(&status) {
            let error = ApiError::from_status(status, &text);
            tracing::debug!(%method, path = url.path(), status, %error, "api request failed");
            return Err(error);
        }
        tracing::trace!(%method, path = url.path(), status, "api request ok");
        decode_body(&text)
    }
}

/// Decode a success body; an empty body decodes as JSON `null`.
fn decode_body<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
    let text = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(text).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
