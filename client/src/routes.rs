//! Route table shared by the navigation menu and the page router.
//!
//! DESIGN
//! ======
//! `ROUTES` is the only place destinations are declared. The drawer menu
//! renders it in order and `resolve` matches locations against it, so the
//! two can never advertise different paths.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use serde::Serialize;

/// Route-level screens the router can mount below the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    Cameras,
    Users,
}

/// One navigable destination: menu label, location path, mounted page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub label: &'static str,
    pub path: &'static str,
    #[serde(skip)]
    pub page: Page,
}

pub const HOME: RouteEntry = RouteEntry { label: "Página Inicial", path: "/", page: Page::Home };
pub const CAMERAS: RouteEntry = RouteEntry { label: "Câmeras", path: "/cams", page: Page::Cameras };
pub const USERS: RouteEntry = RouteEntry { label: "Base de Usuários", path: "/users", page: Page::Users };

/// Destinations in menu display order.
pub const ROUTES: &[RouteEntry] = &[HOME, CAMERAS, USERS];

impl RouteEntry {
    /// Path without its leading slash, as the router declares it. Empty for root.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

/// Entries shown in the drawer menu. Independent of the current location.
pub fn menu_entries() -> &'static [RouteEntry] {
    ROUTES
}

/// Strip any query string or fragment from a location.
fn location_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    &location[..end]
}

/// Whether `entry` matches `location`.
///
/// The root path only matches exactly. Every other path matches itself and
/// anything nested below it on a segment boundary, so `/users/42` matches
/// `/users` but `/usersx` does not.
pub fn matches(entry: &RouteEntry, location: &str) -> bool {
    let path = location_path(location);
    if entry.path == "/" {
        return path.is_empty() || path == "/";
    }
    match path.strip_prefix(entry.path) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Find the page to mount for `location`, or `None` when nothing matches.
pub fn resolve(location: &str) -> Option<Page> {
    ROUTES.iter().find(|entry| matches(entry, location)).map(|entry| entry.page)
}
