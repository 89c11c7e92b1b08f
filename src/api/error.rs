//! HTTP error taxonomy shared by every API wrapper.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors produced by [`ApiClient`](super::client::ApiClient) calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 400 or any other 4xx not listed below.
    #[error("bad request ({status}): {message}")]
    BadRequest { status: u16, message: String },

    /// 401: missing, expired or revoked token.
    #[error("unauthorized")]
    Unauthorized,

    /// 403: signed in but not allowed.
    #[error("forbidden")]
    Forbidden,

    /// 404.
    #[error("not found")]
    NotFound,

    /// 5xx or any status outside the 4xx range.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the JSON the caller expected.
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// The configured API root is not an absolute http(s) URL.
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// Classify a non-success status. `body` is searched for a `message` or
    /// `error` field and otherwise used verbatim.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400..=499 => Self::BadRequest { status, message: error_message(body) },
            _ => Self::Server { status, message: error_message(body) },
        }
    }

    /// `true` when the token was rejected and the session should end.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// HTTP status behind the error, when there was a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest { status, .. } | Self::Server { status, .. } => Some(*status),
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::NotFound => Some(404),
            Self::Network(_) | Self::InvalidResponse(_) | Self::InvalidBaseUrl(_) | Self::HttpClientBuild(_) => {
                None
            }
        }
    }
}

fn error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let field = parsed.as_ref().and_then(|value| {
        ["message", "error"]
            .into_iter()
            .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
    });
    match field {
        Some(message) => message.to_owned(),
        None => body.trim().to_owned(),
    }
}
