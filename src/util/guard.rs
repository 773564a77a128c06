//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route components should apply identical unauthenticated
//! redirect behavior, and the login page needs to know where the user
//! was headed so it can send them back after they sign in.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::session::SessionManager;

/// Redirect to the login page whenever the session has settled with no
/// user present. The attempted path rides along as the intended
/// destination.
pub fn install_unauth_redirect<F>(session: &SessionManager, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let state = session.state();
    let location = use_location();
    Effect::new(move || {
        let current = state.get();
        if !current.loading && !current.is_authenticated() {
            let target = login_redirect_target(&location.pathname.get_untracked());
            navigate(&target, NavigateOptions::default());
        }
    });
}

/// Build the login route carrying the attempted path as the intended
/// destination. The root path carries nothing: `/` is already the
/// post-login default.
pub fn login_redirect_target(attempted: &str) -> String {
    if attempted.is_empty() || attempted == "/" {
        "/login".to_owned()
    } else {
        format!("/login?next={}", urlencoding::encode(attempted))
    }
}
