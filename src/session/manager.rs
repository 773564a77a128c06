//! The authentication session state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! Constructed once at the application root and provided via context.
//! On startup it derives the initial state from persisted tokens; after
//! that the only transitions are `login` and `logout`, driven by the
//! presentation layer. Components read state through the published
//! signal and never reach past the manager to the token store.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use crate::session::exchange::{Credentials, IdentityExchange, LoginError};
use crate::session::store::TokenStore;
use crate::session::telemetry::{ConsoleTelemetry, SessionTelemetry};
use crate::state::session::{Identity, SessionState, User};

/// Authentication session manager.
///
/// Cheap to clone; all clones share the same state signal, seams, and
/// operation epoch.
#[derive(Clone)]
pub struct SessionManager {
    state: RwSignal<SessionState>,
    store: Arc<dyn TokenStore>,
    exchange: Arc<dyn IdentityExchange>,
    telemetry: Arc<dyn SessionTelemetry>,
    /// Bumped by `logout` so a login result that lands afterwards can be
    /// recognized as stale and discarded.
    epoch: Arc<AtomicU64>,
}

impl SessionManager {
    /// Build a manager over the given persistence and exchange seams.
    ///
    /// The session starts as `{ user: None, loading: true }` until
    /// [`SessionManager::initialize`] settles it.
    pub fn new(store: Arc<dyn TokenStore>, exchange: Arc<dyn IdentityExchange>) -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            store,
            exchange,
            telemetry: Arc::new(ConsoleTelemetry),
            epoch: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replace the telemetry seam.
    pub fn with_telemetry(mut self, telemetry: Arc<dyn SessionTelemetry>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Read-only view of the session state.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Derive the initial session state from persisted tokens.
    ///
    /// Spawned once by the application root. Every outcome, including a
    /// failed read, settles the state with loading cleared.
    pub async fn initialize(&self) {
        let identity = restored_identity(self.store.as_ref(), self.telemetry.as_ref()).await;
        self.state.update(|s| s.settle(identity));
    }

    /// Exchange credentials for an authenticated session.
    ///
    /// Exactly one of `Ok(())` or an error is returned per call, and
    /// loading is cleared before either. A logout that lands while the
    /// exchange is in flight wins: the stale result is discarded and the
    /// call reports [`LoginError::Superseded`].
    pub async fn login(&self, credentials: Credentials) -> Result<(), LoginError> {
        let started = self.epoch.load(Ordering::Relaxed);
        self.state.update(SessionState::begin_login);
        let exchanged = self.exchange.authenticate(&credentials).await;
        let current = self.epoch.load(Ordering::Relaxed);
        let (identity, outcome) = login_outcome(exchanged, started, current);
        self.state.update(|s| s.settle(identity));
        outcome
    }

    /// Drop the session and purge persisted credentials.
    ///
    /// Synchronous, infallible, callable from any state, idempotent.
    pub fn logout(&self) {
        self.epoch.fetch_add(1, Ordering::Relaxed);
        self.state.update(SessionState::clear);
        purge_credentials(self.store.as_ref());
    }
}

/// Resolve the startup identity from persisted tokens.
///
/// A read failure is downgraded to "no session" and reported through
/// telemetry; callers cannot distinguish the two, by contract.
async fn restored_identity(
    store: &dyn TokenStore,
    telemetry: &dyn SessionTelemetry,
) -> Option<Identity> {
    match store.get_tokens().await {
        Ok(Some(tokens)) if !tokens.access_token.is_empty() => Some(Identity::Restored),
        Ok(_) => None,
        Err(err) => {
            telemetry.startup_check_failed(&err);
            None
        }
    }
}

/// Decide the post-exchange transition, discarding results that a
/// logout superseded.
fn login_outcome(
    exchanged: Result<User, LoginError>,
    started_epoch: u64,
    current_epoch: u64,
) -> (Option<Identity>, Result<(), LoginError>) {
    if started_epoch != current_epoch {
        return (None, Err(LoginError::Superseded));
    }
    match exchanged {
        Ok(user) => (Some(Identity::Profile(user)), Ok(())),
        Err(err) => (None, Err(err)),
    }
}

/// Purge persisted credentials and any residual authorization-flow
/// state left behind by an interrupted login.
fn purge_credentials(store: &dyn TokenStore) {
    store.clear_tokens();
    store.clear_oauth_state();
}
