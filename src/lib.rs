//! Client core of the prison back-office dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` decides who is signed in and what they may see, `api` talks to the
//! back-office REST API, `storage` keeps the session token between runs and
//! `shell` describes the dashboard pages. `config` is read once at startup.

pub mod api;
pub mod auth;
pub mod config;
pub mod shell;
pub mod storage;
