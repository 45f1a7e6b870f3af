//! Static route table.
//!
//! SYSTEM CONTEXT
//! ==============
//! The table mirrors the router's route definitions as plain data so the
//! navigation guard can look up a target's auth requirement. It is ordered,
//! immutable after construction, and total: the trailing catch-all absorbs
//! anything no static entry matches.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use thiserror::Error;

/// Path pattern of the catch-all entry.
pub const CATCH_ALL: &str = "*";

/// A single route: path pattern, unique name, and whether the view behind it
/// requires an authenticated session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
}

/// Validation failures reported by [`RouteTable::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route path must start with '/': {0}")]
    RelativePath(&'static str),
    #[error("duplicate route path: {0}")]
    DuplicatePath(&'static str),
    #[error("duplicate route name: {0}")]
    DuplicateName(&'static str),
    #[error("route table must end with a catch-all entry")]
    MissingCatchAll,
    #[error("catch-all entry must be the last route")]
    MisplacedCatchAll,
}

/// Ordered route table with a trailing catch-all.
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteDef>,
}

impl RouteTable {
    /// Validate and build a table: absolute paths, unique paths and names,
    /// exactly one catch-all sitting last.
    pub fn new(entries: Vec<RouteDef>) -> Result<Self, RouteTableError> {
        match entries.last() {
            Some(last) if last.path == CATCH_ALL => {}
            _ => return Err(RouteTableError::MissingCatchAll),
        }
        for (i, entry) in entries.iter().enumerate() {
            if entry.path == CATCH_ALL {
                if i + 1 != entries.len() {
                    return Err(RouteTableError::MisplacedCatchAll);
                }
            } else if !entry.path.starts_with('/') {
                return Err(RouteTableError::RelativePath(entry.path));
            }
            if entries[..i].iter().any(|prior| prior.path == entry.path) {
                return Err(RouteTableError::DuplicatePath(entry.path));
            }
            if entries[..i].iter().any(|prior| prior.name == entry.name) {
                return Err(RouteTableError::DuplicateName(entry.name));
            }
        }
        Ok(Self { entries })
    }

    /// The fixed site table. Built directly from static entries; the
    /// validation in [`RouteTable::new`] is exercised over the same data in
    /// tests, keeping this constructor infallible.
    pub fn site() -> Self {
        Self {
            entries: site_entries(),
        }
    }

    /// Resolve a requested path to its route.
    ///
    /// Query string, fragment, and trailing slashes are ignored for the
    /// comparison. Total: anything without a static match lands on the
    /// catch-all.
    pub fn resolve(&self, path: &str) -> &RouteDef {
        let wanted = normalize_path(path);
        match self
            .entries
            .iter()
            .find(|entry| entry.path != CATCH_ALL && entry.path == wanted)
        {
            Some(entry) => entry,
            // Both constructors guarantee a trailing catch-all.
            None => &self.entries[self.entries.len() - 1],
        }
    }
}

fn site_entries() -> Vec<RouteDef> {
    vec![
        RouteDef {
            path: "/",
            name: "home",
            requires_auth: true,
        },
        RouteDef {
            path: "/login",
            name: "login",
            requires_auth: false,
        },
        RouteDef {
            path: "/contact_us",
            name: "contact_us",
            requires_auth: true,
        },
        RouteDef {
            path: "/about",
            name: "about",
            requires_auth: true,
        },
        RouteDef {
            path: CATCH_ALL,
            name: "404",
            requires_auth: true,
        },
    ]
}

/// Strip query and fragment, then drop trailing slashes (except for root).
fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let mut path = &path[..end];
    while path.len() > 1 && path.ends_with('/') {
        path = &path[..path.len() - 1];
    }
    if path.is_empty() { "/" } else { path }
}
