//! Top navigation bar with route links and the logout action.

use leptos::prelude::*;
use leptos_router::{
    NavigateOptions,
    components::A,
    hooks::{use_location, use_navigate},
};

use crate::guard::LOGIN_PATH;
use crate::session::{BrowserSession, SessionStore};

/// Shared header for the signed-in views.
#[component]
pub fn NavBar() -> impl IntoView {
    let navigate = use_navigate();

    let on_logout = move |_| {
        BrowserSession.clear();
        log::info!("signed out");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <span class="navbar__title">"Portal"</span>
            <div class="navbar__tabs">
                <NavTab href="/" label="Home"/>
                <NavTab href="/about" label="About"/>
                <NavTab href="/contact_us" label="Contact Us"/>
            </div>
            <span class="navbar__spacer"></span>
            <button class="btn navbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </nav>
    }
}

/// A single navigation link, highlighted when its route is active.
#[component]
fn NavTab(href: &'static str, label: &'static str) -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let active = move || pathname.get() == href;

    view! {
        <A
            href={href}
            {..}
            attr:class="tab"
            class:tab--active=active
        >
            {label}
        </A>
    }
}
