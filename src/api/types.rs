//! Request-side DTOs shared by the resource wrappers.

use serde::Serialize;

/// Filters and paging for list endpoints. Absent fields are not sent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prison_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl ListQuery {
    #[must_use]
    pub fn with_prison(mut self, prison_id: impl Into<String>) -> Self {
        self.prison_id = Some(prison_id.into());
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Body of the status endpoints (`PATCH /users/{id}/status`,
/// `PATCH /visits/{id}/status`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatusUpdate {
    Active { #[serde(rename = "isActive")] is_active: bool },
    Named { status: String },
}
