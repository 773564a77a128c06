//! Authentication session core: persistence contract, identity exchange,
//! and the session state machine.
//!
//! DESIGN
//! ======
//! The `SessionManager` is an explicitly constructed object with a defined
//! lifecycle: built once in `App`, provided to the component tree via
//! context, torn down with the page. Components reach it through
//! [`use_session`] and never touch the token store directly.

pub mod exchange;
pub mod manager;
pub mod store;
pub mod telemetry;

use leptos::prelude::use_context;

pub use exchange::{Credentials, DemoIdentityExchange, IdentityExchange, LoginError};
pub use manager::SessionManager;
pub use store::{LocalStorageTokenStore, StoreError, TokenSet, TokenStore};
pub use telemetry::{ConsoleTelemetry, SessionTelemetry};

/// Fetch the [`SessionManager`] provided by the application root.
///
/// # Panics
///
/// Panics if no manager is in scope. Calling this outside the provider
/// tree is a programming error, not a recoverable condition.
pub fn use_session() -> SessionManager {
    use_context::<SessionManager>()
        .expect("use_session must be called under a component tree that provides SessionManager")
}
