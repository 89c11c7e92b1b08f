//! Authentication and authorization gate for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the signed-in state, `guard` turns that state plus the
//! current path into a render/redirect decision, `permissions` holds the pure
//! predicates and `hook` binds them to the session user for page code.

pub mod guard;
pub mod hook;
pub mod permissions;
pub mod session;
pub mod types;

pub use guard::{DEFAULT_LANDING_PATH, GuardDecision, LOGIN_PATH, RouteClass, RouteGuard};
pub use hook::UserPermissions;
pub use session::{AuthBackend, SessionStore};
pub use types::{
    Action, AuthError, Credentials, LoginResponse, Permission, PrisonRef, Resource, Role, Session, SessionStatus,
    UserProfile,
};
