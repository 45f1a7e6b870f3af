//! Session-flag storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard only asks whether a session exists; writing and
//! clearing the flag belong to the login and logout flows. Keeping the store
//! behind a trait lets the guard run against an in-memory stand-in in tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// `localStorage` key holding the session flag.
pub const SESSION_KEY: &str = "user";

/// Read and lifecycle surface for the session flag.
pub trait SessionStore {
    /// The stored session value, if any. The value is opaque and never
    /// interpreted beyond presence.
    fn current_user(&self) -> Option<String>;

    /// Store `user` as the session value. Called by the login flow.
    fn set_user(&self, user: &str);

    /// Remove the session value. Called by the logout flow.
    fn clear(&self);

    /// A session exists iff a non-empty value is stored.
    fn is_authenticated(&self) -> bool {
        self.current_user().is_some_and(|user| !user.is_empty())
    }
}

/// Browser store backed by `localStorage` under [`SESSION_KEY`].
///
/// Browser access is wasm-only; native builds see an empty store and writes
/// are no-ops, so the pure routing logic unit-tests off-browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn current_user(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(SESSION_KEY).ok().flatten()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn set_user(&self, user: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(SESSION_KEY, user);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = user;
        }
    }

    fn clear(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(SESSION_KEY);
                }
            }
        }
    }
}
