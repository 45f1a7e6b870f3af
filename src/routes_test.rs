use super::*;

fn entry(path: &'static str, name: &'static str, requires_auth: bool) -> RouteDef {
    RouteDef {
        path,
        name,
        requires_auth,
    }
}

#[test]
fn should_accept_the_site_table() {
    assert!(RouteTable::new(site_entries()).is_ok());
}

#[test]
fn should_resolve_each_static_route() {
    let table = RouteTable::site();
    assert_eq!(table.resolve("/").name, "home");
    assert_eq!(table.resolve("/login").name, "login");
    assert_eq!(table.resolve("/contact_us").name, "contact_us");
    assert_eq!(table.resolve("/about").name, "about");
}

#[test]
fn should_mark_only_login_as_public() {
    let table = RouteTable::site();
    assert!(!table.resolve("/login").requires_auth);
    for path in ["/", "/contact_us", "/about", "/anything/else"] {
        assert!(table.resolve(path).requires_auth, "{path} should require auth");
    }
}

#[test]
fn should_resolve_unknown_paths_to_the_catch_all() {
    let table = RouteTable::site();
    let route = table.resolve("/nonexistent/path");
    assert_eq!(route.name, "404");
    assert!(route.requires_auth);
}

#[test]
fn should_ignore_query_and_fragment_when_resolving() {
    let table = RouteTable::site();
    assert_eq!(table.resolve("/about?tab=team").name, "about");
    assert_eq!(table.resolve("/contact_us#form").name, "contact_us");
    assert_eq!(table.resolve("/?utm=x").name, "home");
}

#[test]
fn should_tolerate_trailing_slashes_when_resolving() {
    let table = RouteTable::site();
    assert_eq!(table.resolve("/login/").name, "login");
    assert_eq!(table.resolve("/about//").name, "about");
}

#[test]
fn should_reject_a_table_without_a_catch_all() {
    let result = RouteTable::new(vec![entry("/", "home", true)]);
    assert_eq!(result.unwrap_err(), RouteTableError::MissingCatchAll);
}

#[test]
fn should_reject_an_empty_table() {
    let result = RouteTable::new(Vec::new());
    assert_eq!(result.unwrap_err(), RouteTableError::MissingCatchAll);
}

#[test]
fn should_reject_a_catch_all_in_the_middle() {
    let result = RouteTable::new(vec![
        entry("/", "home", true),
        entry(CATCH_ALL, "404", true),
        entry("/about", "about", true),
    ]);
    assert_eq!(result.unwrap_err(), RouteTableError::MisplacedCatchAll);
}

#[test]
fn should_reject_duplicate_paths() {
    let result = RouteTable::new(vec![
        entry("/", "home", true),
        entry("/", "home_again", true),
        entry(CATCH_ALL, "404", true),
    ]);
    assert_eq!(result.unwrap_err(), RouteTableError::DuplicatePath("/"));
}

#[test]
fn should_reject_duplicate_names() {
    let result = RouteTable::new(vec![
        entry("/", "home", true),
        entry("/welcome", "home", true),
        entry(CATCH_ALL, "404", true),
    ]);
    assert_eq!(result.unwrap_err(), RouteTableError::DuplicateName("home"));
}

#[test]
fn should_reject_relative_paths() {
    let result = RouteTable::new(vec![
        entry("about", "about", true),
        entry(CATCH_ALL, "404", true),
    ]);
    assert_eq!(result.unwrap_err(), RouteTableError::RelativePath("about"));
}

#[test]
fn should_normalize_paths() {
    assert_eq!(normalize_path("/about"), "/about");
    assert_eq!(normalize_path("/about/"), "/about");
    assert_eq!(normalize_path("/about?x=1#y"), "/about");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path("?x=1"), "/");
}
