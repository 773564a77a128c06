//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. Owned by the
//! `SessionManager`, which publishes it as a read-only signal.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Profile returned by the identity exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Identity attached to an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identity {
    /// Session revived from persisted tokens; no profile is known yet.
    Restored,
    /// Full profile confirmed by the identity exchange.
    Profile(User),
}

/// Authentication state tracking the current identity and loading status.
///
/// `loading` is true only while the startup token check or a login
/// exchange is in flight. Authentication is derived from `user` so the
/// two can never disagree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<Identity>,
    pub loading: bool,
}

impl Default for SessionState {
    /// The state a freshly constructed session starts in: nobody signed
    /// in, startup check still pending.
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl SessionState {
    /// True iff an identity is attached to the session.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Finish a suspending operation: attach the identity it produced,
    /// if any, and clear the loading flag.
    pub fn settle(&mut self, identity: Option<Identity>) {
        if let Some(identity) = identity {
            self.user = Some(identity);
        }
        self.loading = false;
    }

    /// Mark a login exchange as in flight.
    pub fn begin_login(&mut self) {
        self.loading = true;
    }

    /// Drop the current identity. Loading is left untouched: it belongs
    /// to whichever startup check or login exchange set it.
    pub fn clear(&mut self) {
        self.user = None;
    }
}
