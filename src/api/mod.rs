//! REST API wrappers, one module per back-office resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` owns HTTP and the bearer token, `error` classifies failures, and
//! every resource module is a flat set of pass-through calls on top.

pub mod auth;
pub mod behaviour_records;
pub mod client;
pub mod error;
pub mod prisons;
pub mod types;
pub mod users;
pub mod visitors;
pub mod visits;
pub mod work_records;

pub use auth::AuthApi;
pub use client::ApiClient;
pub use error::ApiError;
pub use types::{ListQuery, StatusUpdate};
