//! Dashboard page behind the authentication guard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;
use crate::state::session::Identity;
use crate::util::guard::install_unauth_redirect;

/// Protected view. Unauthenticated visitors are redirected to the login
/// page with this route remembered as the intended destination; signing
/// out here bounces through the same guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    install_unauth_redirect(&session, use_navigate());

    let state = session.state();
    let identity_label = move || match state.get().user {
        Some(Identity::Profile(user)) => format!("Signed in as {} ({})", user.name, user.email),
        Some(Identity::Restored) => "Signed in from a previous session".to_owned(),
        None => String::new(),
    };

    let on_logout = Callback::new(move |()| session.logout());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <button class="btn" on:click=move |_| on_logout.run(())>
                    "Sign out"
                </button>
            </header>
            <p class="dashboard-page__identity">{identity_label}</p>
        </div>
    }
}
