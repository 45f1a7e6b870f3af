//! Authenticated landing page.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::session::{BrowserSession, SessionStore};

/// Home page — greets the signed-in visitor.
///
/// The guard redirects signed-out visits to login before this view settles;
/// the fallback copy below only flashes while that happens.
#[component]
pub fn HomePage() -> impl IntoView {
    let user = RwSignal::new(BrowserSession.current_user().unwrap_or_default());

    view! {
        <div class="home-page">
            <NavBar/>
            <main class="page-body">
                <h1>"Welcome"</h1>
                <Show
                    when=move || !user.get().is_empty()
                    fallback=|| view! { <p>"Redirecting to login..."</p> }
                >
                    <p>"Signed in as " <strong>{move || user.get()}</strong></p>
                </Show>
            </main>
        </div>
    }
}
