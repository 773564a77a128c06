//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, home::HomePage, login::LoginPage};
use crate::session::{DemoIdentityExchange, LocalStorageTokenStore, SessionManager};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session manager for the lifetime of the page: constructs it
/// over the production seams, provides it via context, and spawns the
/// startup check. Effects only run in the browser, so SSR renders the
/// loading state and the client settles it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionManager::new(
        Arc::new(LocalStorageTokenStore),
        Arc::new(DemoIdentityExchange),
    );
    provide_context(session.clone());

    Effect::new(move || {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.initialize().await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/oauth-playground.css"/>
        <Title text="OAuth Playground"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
