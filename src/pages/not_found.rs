//! Catch-all page for unmatched paths.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

/// 404 view. Gated like every other non-login route: the guard sends
/// signed-out visitors to login before this settles.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <NavBar/>
            <main class="page-body">
                <h1>"404"</h1>
                <p>"This page does not exist."</p>
            </main>
        </div>
    }
}
