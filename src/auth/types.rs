//! Identity DTOs and the auth error taxonomy.
//!
//! DESIGN
//! ======
//! Roles and permissions arrive from the backend as plain strings. They are
//! parsed into closed enums at the serde boundary so the rest of the crate can
//! match on them exhaustively; strings this build does not know about are kept
//! verbatim in an `Other` variant instead of being dropped.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

// =============================================================================
// RESOURCES & ACTIONS
// =============================================================================

/// A back-office resource a permission can be granted on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    Prisons,
    Users,
    Visitors,
    Visits,
    WorkRecords,
    BehaviourRecords,
}

impl Resource {
    pub const ALL: [Self; 6] = [
        Self::Prisons,
        Self::Users,
        Self::Visitors,
        Self::Visits,
        Self::WorkRecords,
        Self::BehaviourRecords,
    ];

    /// Wire name used as the prefix of a permission string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prisons => "prisons",
            Self::Users => "users",
            Self::Visitors => "visitors",
            Self::Visits => "visits",
            Self::WorkRecords => "work_records",
            Self::BehaviourRecords => "behaviour_records",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|resource| resource.as_str() == raw)
    }
}

/// An operation on a resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    pub const ALL: [Self; 4] = [Self::Read, Self::Create, Self::Update, Self::Delete];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.as_str() == raw)
    }
}

// =============================================================================
// PERMISSION
// =============================================================================

/// A named capability a user may hold, e.g. `"visits:create"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Permission {
    /// A known `resource:action` pair.
    Grant { resource: Resource, action: Action },
    /// Any permission string outside the known set, kept verbatim.
    Other(String),
}

impl Permission {
    #[must_use]
    pub const fn new(resource: Resource, action: Action) -> Self {
        Self::Grant { resource, action }
    }

    /// Parse a permission string; unknown strings become [`Permission::Other`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let known = raw
            .split_once(':')
            .and_then(|(resource, action)| Some(Self::new(Resource::parse(resource)?, Action::parse(action)?)));
        known.unwrap_or_else(|| Self::Other(raw.to_owned()))
    }
}

impl From<String> for Permission {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for Permission {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Permission> for String {
    fn from(permission: Permission) -> Self {
        permission.to_string()
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grant { resource, action } => write!(f, "{}:{}", resource.as_str(), action.as_str()),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

// =============================================================================
// ROLE
// =============================================================================

pub const SUPER_ADMIN_ROLE: &str = "super_admin";
pub const PRISON_ADMIN_ROLE: &str = "prison_admin";

/// The role a user is assigned. `SuperAdmin` implicitly holds every permission.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    SuperAdmin,
    PrisonAdmin,
    Other(String),
}

impl Role {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            SUPER_ADMIN_ROLE => Self::SuperAdmin,
            PRISON_ADMIN_ROLE => Self::PrisonAdmin,
            other => Self::Other(other.to_owned()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SuperAdmin => SUPER_ADMIN_ROLE,
            Self::PrisonAdmin => PRISON_ADMIN_ROLE,
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_owned()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// USER PROFILE
// =============================================================================

/// Reference to the prison a user is assigned to.
///
/// The backend sends either a bare id or an embedded `{ id, name }` object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PrisonRefRepr")]
pub struct PrisonRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PrisonRefRepr {
    Id(RawId),
    Object {
        id: RawId,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<PrisonRefRepr> for PrisonRef {
    fn from(repr: PrisonRefRepr) -> Self {
        match repr {
            PrisonRefRepr::Id(id) => Self { id: id.into(), name: None },
            PrisonRefRepr::Object { id, name } => Self { id: id.into(), name },
        }
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Snapshot of the signed-in user as returned by `GET /auth/me`.
///
/// Replaced wholesale on refresh; never patched in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role_name: Role,
    #[serde(default)]
    pub permissions: BTreeSet<Permission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prison: Option<PrisonRef>,
}

impl UserProfile {
    /// Name shown in the dashboard header: full name, then username, then id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or(&self.id)
    }
}

// =============================================================================
// LOGIN
// =============================================================================

/// Username/password pair posted to `/auth/login`.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "accessToken")]
    pub token: String,
    pub user: UserProfile,
}

// =============================================================================
// SESSION
// =============================================================================

/// Coarse session state the route guard switches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// The client's current authentication state.
///
/// Owned by [`SessionStore`](super::session::SessionStore); everything else
/// only sees cloned snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub loading: bool,
    /// Bumped on every applied transition. Async results captured under an
    /// older generation are discarded.
    pub(crate) generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self { user: None, token: None, loading: true, generation: 0 }
    }
}

impl Session {
    /// A resolved session with nobody signed in.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self { loading: false, ..Self::default() }
    }

    /// A resolved session for `user`.
    #[must_use]
    pub fn authenticated(user: UserProfile, token: impl Into<String>) -> Self {
        Self { user: Some(user), token: Some(token.into()), loading: false, generation: 0 }
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        if self.loading {
            SessionStatus::Loading
        } else if self.user.is_some() && self.token.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

// =============================================================================
// ERROR
// =============================================================================

/// Failures surfaced by sign-in and session restoration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend rejected the username/password.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// The stored token is no longer accepted.
    #[error("session token expired or revoked")]
    ExpiredToken,

    /// The backend could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with an unexpected failure.
    #[error("server error: {0}")]
    Server(String),

    /// The session changed (e.g. a logout) while the request was in flight;
    /// the response was discarded.
    #[error("sign-in superseded by a newer session change")]
    Superseded,
}
