//! Identity exchange: the seam that turns credentials into a confirmed
//! identity.
//!
//! The shipped [`DemoIdentityExchange`] synthesizes a fixed demo profile;
//! a real deployment swaps in an implementation that talks to the
//! identity provider. The session manager only depends on the trait, so
//! the replacement does not touch the state machine.

#[cfg(test)]
#[path = "exchange_test.rs"]
mod exchange_test;

use futures::future::LocalBoxFuture;

use crate::state::session::User;

/// Credentials captured by the login form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Failure of a login attempt.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The provider rejected the credentials; carries a human-readable
    /// reason suitable for display.
    #[error("{0}")]
    Rejected(String),
    /// The exchange itself failed (network, unexpected response). The
    /// presentation layer renders a generic message, never this text.
    #[error("identity exchange failed: {0}")]
    Transport(String),
    /// A logout invalidated this attempt while it was in flight.
    #[error("login superseded by logout")]
    Superseded,
}

/// Credential-to-identity exchange.
pub trait IdentityExchange: Send + Sync {
    /// Exchange credentials for a confirmed identity.
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> LocalBoxFuture<'_, Result<User, LoginError>>;
}

/// Placeholder exchange returning a fixed demo identity.
///
/// In the browser build it sleeps briefly so the submission lifecycle
/// (busy flag, disabled controls) behaves as it would against a real
/// provider.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoIdentityExchange;

/// The profile the demo exchange confirms for any credentials.
pub fn demo_user() -> User {
    User {
        id: "1".to_owned(),
        name: "Demo User".to_owned(),
        email: "demo@example.com".to_owned(),
    }
}

impl IdentityExchange for DemoIdentityExchange {
    fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> LocalBoxFuture<'_, Result<User, LoginError>> {
        let _ = credentials;
        Box::pin(async move {
            #[cfg(feature = "hydrate")]
            gloo_timers::future::sleep(std::time::Duration::from_millis(300)).await;
            Ok(demo_user())
        })
    }
}
