//! Token persistence contract and the browser localStorage implementation.
//!
//! Client-side (hydrate): real `localStorage` access via `web-sys`.
//! Server-side (SSR): inert stubs reporting no stored session, since
//! durable credentials only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Reads can fail (storage unavailable, corrupted payload) and the
//! failure is typed so the session manager can downgrade it; clears are
//! infallible and safe to call when nothing is stored.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use futures::future::LocalBoxFuture;
use serde::{Deserialize, Serialize};

/// localStorage key holding the persisted token set as JSON.
#[cfg(feature = "hydrate")]
const TOKENS_KEY: &str = "oauth_playground_tokens";

/// localStorage key holding residual authorization-flow state (an
/// interrupted login can leave a stale in-progress marker behind).
#[cfg(feature = "hydrate")]
const OAUTH_STATE_KEY: &str = "oauth_playground_oauth_state";

/// Credential material persisted across page loads.
///
/// A non-empty `access_token` is the sole authority for "previously
/// authenticated" at startup; the remaining fields ride along opaquely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub token_type: Option<String>,
}

/// Failure reading persisted token data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("browser storage is unavailable")]
    Unavailable,
    #[error("stored token data is corrupted: {0}")]
    Corrupted(String),
}

/// Durable persistence contract for session credentials.
///
/// `get_tokens` may suspend and may fail; both clear operations are
/// synchronous no-ops when nothing is stored and never fail.
pub trait TokenStore: Send + Sync {
    /// Retrieve the persisted token set, if any.
    fn get_tokens(&self) -> LocalBoxFuture<'_, Result<Option<TokenSet>, StoreError>>;

    /// Remove the persisted token set.
    fn clear_tokens(&self);

    /// Remove residual authorization-flow state.
    fn clear_oauth_state(&self);
}

/// Decode a persisted token payload.
pub fn decode_token_set(raw: &str) -> Result<TokenSet, StoreError> {
    serde_json::from_str(raw).map_err(|e| StoreError::Corrupted(e.to_string()))
}

/// `TokenStore` backed by browser `localStorage`.
///
/// Outside the `hydrate` build every operation is inert: reads report no
/// stored session and clears do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get_tokens(&self) -> LocalBoxFuture<'_, Result<Option<TokenSet>, StoreError>> {
        Box::pin(async move {
            #[cfg(feature = "hydrate")]
            {
                read_stored_tokens()
            }
            #[cfg(not(feature = "hydrate"))]
            {
                Ok(None)
            }
        })
    }

    fn clear_tokens(&self) {
        #[cfg(feature = "hydrate")]
        remove_item(TOKENS_KEY);
    }

    fn clear_oauth_state(&self) {
        #[cfg(feature = "hydrate")]
        remove_item(OAUTH_STATE_KEY);
    }
}

#[cfg(feature = "hydrate")]
fn read_stored_tokens() -> Result<Option<TokenSet>, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    let storage = window
        .local_storage()
        .map_err(|_| StoreError::Unavailable)?
        .ok_or(StoreError::Unavailable)?;
    let raw = storage
        .get_item(TOKENS_KEY)
        .map_err(|_| StoreError::Unavailable)?;
    match raw {
        Some(raw) => decode_token_set(&raw).map(Some),
        None => Ok(None),
    }
}

#[cfg(feature = "hydrate")]
fn remove_item(key: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}
