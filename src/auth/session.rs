//! Auth session store: the single owner of the current [`Session`].
//!
//! ARCHITECTURE
//! ============
//! State lives in a `tokio::sync::watch` channel. Writers go through
//! `send_modify` / `send_if_modified`, which apply the transition under the
//! channel lock and wake every subscriber before returning. Readers get
//! snapshots via [`SessionStore::snapshot`] or a receiver from
//! [`SessionStore::subscribe`].
//!
//! STALE RESPONSES
//! ===============
//! Each applied transition bumps `Session::generation`. `initialize` and
//! `login` remember the generation they started under and only commit if it
//! is unchanged, so a slow login response that lands after a logout is
//! dropped instead of signing the user back in.
//!
//! LOADING
//! =======
//! `loading` starts true and only ever goes false. While `initialize` is
//! restoring, it alone clears the flag; otherwise a login or logout that
//! resolves the session clears it too.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use super::hook::UserPermissions;
use super::types::{AuthError, Credentials, LoginResponse, Session, SessionStatus, UserProfile};
use crate::storage::TokenStore;

/// Remote side of authentication.
#[async_trait::async_trait]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a token and profile.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, AuthError>;

    /// Fetch the profile that `token` belongs to.
    async fn current_user(&self, token: &str) -> Result<UserProfile, AuthError>;

    /// Tell the backend the token is no longer in use.
    async fn logout(&self, token: &str) -> Result<(), AuthError>;

    /// Called whenever the active token changes so shared HTTP clients can
    /// attach or drop the bearer header.
    fn attach_token(&self, _token: Option<&str>) {}
}

enum Restore {
    Restored { token: String, user: UserProfile },
    Anonymous,
    Failed,
}

/// Owns the session and persists its token.
pub struct SessionStore<B, T> {
    backend: Arc<B>,
    tokens: T,
    state: watch::Sender<Session>,
    restoring: AtomicBool,
}

impl<B, T> SessionStore<B, T>
where
    B: AuthBackend + 'static,
    T: TokenStore,
{
    /// Create a store in the initial loading state.
    #[must_use]
    pub fn new(backend: Arc<B>, tokens: T) -> Self {
        let (state, _) = watch::channel(Session::default());
        Self { backend, tokens, state, restoring: AtomicBool::new(false) }
    }

    #[must_use]
    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.state.borrow().status()
    }

    /// Permission facade bound to the current user.
    #[must_use]
    pub fn permissions(&self) -> UserPermissions {
        UserPermissions::from_session(&self.state.borrow())
    }

    /// Receiver notified after every session transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    /// Restore a persisted session, then leave the loading state.
    ///
    /// Failures are logged and end in the unauthenticated state; they are
    /// never returned.
    pub async fn initialize(&self) {
        self.restoring.store(true, Ordering::SeqCst);
        let started = self.generation();

        let outcome = match self.tokens.load() {
            Ok(Some(token)) => match self.backend.current_user(&token).await {
                Ok(user) => Restore::Restored { token, user },
                Err(error) => {
                    tracing::warn!(%error, "session restore rejected; clearing stored token");
                    Restore::Failed
                }
            },
            Ok(None) => Restore::Anonymous,
            Err(error) => {
                tracing::warn!(%error, "could not read stored session token");
                Restore::Failed
            }
        };

        let restored_token = match &outcome {
            Restore::Restored { token, .. } => Some(token.clone()),
            Restore::Anonymous | Restore::Failed => None,
        };
        let failed = matches!(outcome, Restore::Failed);

        let mut stale = false;
        self.state.send_if_modified(|session| {
            if session.generation != started {
                stale = true;
                let was_loading = session.loading;
                session.loading = false;
                return was_loading;
            }
            match outcome {
                Restore::Restored { token, user } => {
                    session.user = Some(user);
                    session.token = Some(token);
                }
                Restore::Anonymous | Restore::Failed => {
                    session.user = None;
                    session.token = None;
                }
            }
            session.loading = false;
            session.generation += 1;
            true
        });
        self.restoring.store(false, Ordering::SeqCst);

        if stale {
            tracing::debug!("session changed during restore; discarding restored profile");
            return;
        }
        if failed {
            self.clear_stored_token();
        }
        self.backend.attach_token(restored_token.as_deref());
        match self.snapshot().user {
            Some(user) => tracing::info!(user_id = %user.id, role = %user.role_name, "session restored"),
            None => tracing::debug!("no session to restore"),
        }
    }

    /// Sign in and persist the returned token.
    ///
    /// # Errors
    ///
    /// Returns the backend's [`AuthError`] unchanged, or
    /// [`AuthError::Superseded`] if the session changed while the request was
    /// in flight. The session is left as it was on any error.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, AuthError> {
        let started = self.generation();

        let LoginResponse { token, user } = self
            .backend
            .login(credentials)
            .await
            .inspect_err(|error| tracing::warn!(username = %credentials.username, %error, "login failed"))?;

        let applied = self.state.send_if_modified(|session| {
            if session.generation != started {
                return false;
            }
            session.user = Some(user.clone());
            session.token = Some(token.clone());
            self.settle_loading(session);
            session.generation += 1;
            true
        });
        if !applied {
            tracing::warn!(username = %credentials.username, "discarding login response; session changed meanwhile");
            return Err(AuthError::Superseded);
        }

        if let Err(error) = self.tokens.save(&token) {
            tracing::warn!(%error, "could not persist session token");
        }
        self.backend.attach_token(Some(&token));
        tracing::info!(user_id = %user.id, role = %user.role_name, "signed in");
        Ok(user)
    }

    /// Sign out immediately.
    ///
    /// The backend is notified on a spawned task when a tokio runtime is
    /// available; the returned handle may be awaited but the session is
    /// already cleared when this returns.
    pub fn logout(&self) -> Option<JoinHandle<()>> {
        let previous = self.clear_session();
        tracing::info!("signed out");

        let token = previous?;
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("no async runtime; skipping server logout notification");
            return None;
        };
        let backend = Arc::clone(&self.backend);
        Some(runtime.spawn(async move {
            if let Err(error) = backend.logout(&token).await {
                tracing::debug!(%error, "server logout notification failed");
            }
        }))
    }

    /// Drop a session the backend no longer accepts. No server notification.
    pub fn expire(&self) {
        if self.clear_session().is_some() {
            tracing::warn!("session token rejected by the API; signed out");
        }
    }

    /// Clear state and storage; returns the token that was active.
    fn clear_session(&self) -> Option<String> {
        let mut previous = None;
        self.state.send_modify(|session| {
            previous = session.token.take();
            session.user = None;
            self.settle_loading(session);
            session.generation += 1;
        });
        self.clear_stored_token();
        self.backend.attach_token(None);
        previous
    }

    /// A resolved transition ends the loading window unless a restore is in
    /// flight; that restore clears it when it finishes.
    fn settle_loading(&self, session: &mut Session) {
        if !self.restoring.load(Ordering::SeqCst) {
            session.loading = false;
        }
    }

    fn clear_stored_token(&self) {
        if let Err(error) = self.tokens.clear() {
            tracing::warn!(%error, "could not clear stored session token");
        }
    }
}
