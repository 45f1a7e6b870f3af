//! About page.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <NavBar/>
            <main class="page-body">
                <h1>"About"</h1>
                <p>"A small Leptos portal demonstrating auth-gated client-side routing."</p>
            </main>
        </div>
    }
}
