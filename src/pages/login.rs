//! Login page: stores the session flag and resumes the deferred path.

use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    hooks::{use_navigate, use_query_map},
};

use crate::guard::NEXT_URL_PARAM;
use crate::session::{BrowserSession, SessionStore};

/// Login page — a single name field; any non-empty value signs the visitor
/// in. On success navigates to the deferred `nextUrl`, or `/` when absent.
#[component]
pub fn LoginPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let query = use_query_map();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = name.get().trim().to_owned();
        if value.is_empty() {
            info.set("Enter a name first.".to_owned());
            return;
        }
        BrowserSession.set_user(&value);
        // Only resume same-app paths; anything else falls back to home.
        let next = query
            .get_untracked()
            .get(NEXT_URL_PARAM)
            .filter(|next| next.starts_with('/'))
            .unwrap_or_else(|| "/".to_owned());
        log::info!("signed in, resuming {next}");
        navigate(&next, NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Portal"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
