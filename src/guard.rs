//! Navigation guard policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every attempted route transition passes through [`evaluate`] before the
//! view settles. The policy itself is a pure function of the requested path,
//! the target route's auth requirement, and the injected session store; the
//! reactive wiring that acts on the decision lives in `app`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::session::SessionStore;

/// Path of the login route, the redirect target for unauthenticated visits.
pub const LOGIN_PATH: &str = "/login";

/// Query parameter carrying the originally requested path through a login
/// redirect, so the login flow can resume it afterwards.
pub const NEXT_URL_PARAM: &str = "nextUrl";

/// Outcome of evaluating the guard for one attempted transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested route unchanged.
    Allow,
    /// Already signed in and heading for the login view; go home instead.
    RedirectHome,
    /// Authentication required and absent; go to login, remembering where
    /// the visitor wanted to be.
    RedirectLogin { next_url: String },
}

/// Decide the actual destination for a transition to `full_path`.
///
/// First match wins:
/// 1. login path and an authenticated session -> [`GuardDecision::RedirectHome`];
/// 2. auth-required route and no session -> [`GuardDecision::RedirectLogin`]
///    with `next_url` set to the requested path, query included;
/// 3. anything else -> [`GuardDecision::Allow`].
///
/// No side effects and no failure modes: every input combination, including
/// a missing session value, lands on exactly one of the three decisions.
pub fn evaluate(full_path: &str, requires_auth: bool, session: &impl SessionStore) -> GuardDecision {
    let authenticated = session.is_authenticated();

    if is_login_path(full_path) && authenticated {
        return GuardDecision::RedirectHome;
    }
    if requires_auth && !authenticated {
        return GuardDecision::RedirectLogin {
            next_url: full_path.to_owned(),
        };
    }
    GuardDecision::Allow
}

/// Whether `full_path` addresses the login view: `/login` with an optional
/// trailing slash, ASCII case-insensitive. Query string and fragment are
/// ignored, so `/login?x=1` counts.
pub fn is_login_path(full_path: &str) -> bool {
    let end = full_path.find(['?', '#']).unwrap_or(full_path.len());
    let path = full_path[..end].trim_end_matches('/');
    path.eq_ignore_ascii_case(LOGIN_PATH)
}

/// Build the login redirect target carrying `next_url` as a form-urlencoded
/// query parameter.
pub fn login_redirect(next_url: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair(NEXT_URL_PARAM, next_url)
        .finish();
    format!("{LOGIN_PATH}?{query}")
}
