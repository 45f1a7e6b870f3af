//! Contact page.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;

#[component]
pub fn ContactUsPage() -> impl IntoView {
    view! {
        <div class="contact-page">
            <NavBar/>
            <main class="page-body">
                <h1>"Contact Us"</h1>
                <p>"Write to " <a href="mailto:hello@example.com">"hello@example.com"</a></p>
            </main>
        </div>
    }
}
