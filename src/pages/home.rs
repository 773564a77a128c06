//! Public landing page.

use leptos::prelude::*;

use crate::session::use_session;

/// Home page — open to everyone; shows sign-in or dashboard/sign-out
/// affordances depending on the session.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let on_logout = Callback::new(move |()| session.logout());

    view! {
        <div class="home-page">
            <h1>"OAuth Playground"</h1>
            <p>"Explore OAuth 2.0 flows against a demo identity provider."</p>
            <Show
                when=move || state.get().is_authenticated()
                fallback=|| {
                    view! {
                        <a class="btn btn--primary" href="/login">
                            "Sign in"
                        </a>
                    }
                }
            >
                <div class="home-page__actions">
                    <a class="btn btn--primary" href="/dashboard">
                        "Open dashboard"
                    </a>
                    <button class="btn" on:click=move |_| on_logout.run(())>
                        "Sign out"
                    </button>
                </div>
            </Show>
        </div>
    }
}
