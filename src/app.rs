//! Root application component with routing and the navigation guard.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::guard::{self, GuardDecision};
use crate::pages::{
    about::AboutPage, contact_us::ContactUsPage, home::HomePage, login::LoginPage,
    not_found::NotFoundPage,
};
use crate::routes::RouteTable;
use crate::session::BrowserSession;

/// Root application component.
///
/// Sets up client-side routing and installs the guard. The `Routes` fallback
/// is the router-level counterpart of the table's `*` entry, so unmatched
/// paths render the 404 view and stay auth-gated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portal"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("contact_us") view=ContactUsPage/>
                <Route path=StaticSegment("about") view=AboutPage/>
            </Routes>
        </Router>
    }
}

/// Render-less guard installation.
///
/// Watches the location, resolves the target in the route table, and
/// performs whatever [`guard::evaluate`] decides. An allowed transition is
/// left untouched; navigation events are serialized by the router, so each
/// redirect settles before the next evaluation runs.
#[component]
fn RouteGuard() -> impl IntoView {
    let table = StoredValue::new(RouteTable::site());
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let search = location.search.get();
        let query = search.trim_start_matches('?');
        let full_path = if query.is_empty() {
            path.clone()
        } else {
            format!("{path}?{query}")
        };

        let requires_auth = table.with_value(|table| table.resolve(&path).requires_auth);
        match guard::evaluate(&full_path, requires_auth, &BrowserSession) {
            GuardDecision::Allow => {}
            GuardDecision::RedirectHome => {
                log::debug!("already signed in, leaving {full_path} for /");
                navigate("/", NavigateOptions::default());
            }
            GuardDecision::RedirectLogin { next_url } => {
                log::debug!("auth required for {next_url}, redirecting to login");
                navigate(&guard::login_redirect(&next_url), NavigateOptions::default());
            }
        }
    });
}
