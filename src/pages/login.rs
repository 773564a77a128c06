//! Login page: email + password sign-in against the session manager.
//!
//! COORDINATION CONTRACT
//! =====================
//! The form never renders its interactive controls while the startup
//! session check is in flight, and an already-authenticated visitor is
//! redirected to the intended destination instead of seeing the form.
//! Submission re-enables the form after every outcome.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

#[cfg(any(test, feature = "hydrate"))]
use crate::session::LoginError;
use crate::session::{Credentials, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let session = use_session();
    let state = session.state();
    let query = use_query_map();

    // An authenticated visitor skips the form and goes back where they
    // were headed. The same effect completes a successful submit, once
    // the session flips to authenticated.
    {
        let navigate = use_navigate();
        Effect::new(move || {
            let current = state.get();
            if !current.loading && current.is_authenticated() {
                let dest = resolve_destination(query.get_untracked().get("next").as_deref());
                navigate(
                    &dest,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
        });
    }

    let on_submit = Callback::new(move |()| {
        if submitting.get() {
            return;
        }
        error.set(String::new());
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = session.login(credentials).await {
                    error.set(login_error_message(&err));
                }
                submitting.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, credentials);
            submitting.set(false);
        }
    });

    // Startup check pending: show a placeholder instead of the form. A
    // login in flight keeps the form mounted (submitting is local).
    let startup_pending = move || state.get().loading && !submitting.get();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in to OAuth Playground"</h1>
                <Show
                    when=move || !startup_pending()
                    fallback=|| view! { <p class="login-message">"Checking session..."</p> }
                >
                    <Show when=move || !error.get().is_empty()>
                        <div class="login-alert">{move || error.get()}</div>
                    </Show>
                    <form
                        class="login-form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            on_submit.run(());
                        }
                    >
                        <div class="login-field">
                            <label for="email">"Email address"</label>
                            <input
                                id="email"
                                class="login-input"
                                type="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                disabled=move || submitting.get()
                            />
                        </div>
                        <div class="login-field">
                            <label for="password">"Password"</label>
                            <input
                                id="password"
                                class="login-input"
                                type="password"
                                placeholder="••••••••"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                disabled=move || submitting.get()
                            />
                        </div>
                        <button class="login-button" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                    <a class="login-back" href="/">"Back to home"</a>
                </Show>
            </div>
        </div>
    }
}

/// Validate the form fields before any login attempt is made.
fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Please enter both email and password");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Message shown for a failed login. Rejections carry their own reason;
/// everything else gets the generic copy, never the raw error.
#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(error: &LoginError) -> String {
    match error {
        LoginError::Rejected(reason) if !reason.trim().is_empty() => reason.clone(),
        LoginError::Rejected(_) => "Invalid email or password".to_owned(),
        LoginError::Transport(_) | LoginError::Superseded => {
            "An error occurred during login. Please try again.".to_owned()
        }
    }
}

/// Resolve the intended destination from the `next` query parameter.
/// Only app-local paths are accepted; anything else falls back to `/`.
fn resolve_destination(next: Option<&str>) -> String {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}
