use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_root_is_home() {
    assert_eq!(resolve("/"), Some(Page::Home));
    assert_eq!(resolve(""), Some(Page::Home));
}

#[test]
fn resolve_users_prefix_is_users() {
    assert_eq!(resolve("/users"), Some(Page::Users));
    assert_eq!(resolve("/users/"), Some(Page::Users));
    assert_eq!(resolve("/users/42/edit"), Some(Page::Users));
}

#[test]
fn resolve_cams_prefix_is_cameras() {
    assert_eq!(resolve("/cams"), Some(Page::Cameras));
    assert_eq!(resolve("/cams/2"), Some(Page::Cameras));
}

#[test]
fn resolve_unknown_is_none() {
    assert_eq!(resolve("/unknown"), None);
    assert_eq!(resolve("/cameras"), None);
}

#[test]
fn resolve_requires_segment_boundary() {
    assert_eq!(resolve("/usersx"), None);
    assert_eq!(resolve("/camsfoo"), None);
}

#[test]
fn resolve_ignores_query_and_fragment() {
    assert_eq!(resolve("/users?tab=new"), Some(Page::Users));
    assert_eq!(resolve("/?x=1"), Some(Page::Home));
    assert_eq!(resolve("/cams#3"), Some(Page::Cameras));
}

#[test]
fn root_entry_does_not_prefix_match() {
    let root = ROUTES[0];
    assert!(matches(&root, "/"));
    assert!(!matches(&root, "/users"));
}

// =============================================================
// Route table
// =============================================================

#[test]
fn menu_lists_route_table_in_order() {
    let labels: Vec<_> = menu_entries().iter().map(|e| e.label).collect();
    assert_eq!(labels, ["Página Inicial", "Câmeras", "Base de Usuários"]);
    assert_eq!(menu_entries(), ROUTES);
}

#[test]
fn every_menu_entry_resolves_to_its_own_page() {
    for entry in menu_entries() {
        assert_eq!(resolve(entry.path), Some(entry.page), "path {}", entry.path);
    }
}

#[test]
fn route_paths_are_unique() {
    for (i, a) in ROUTES.iter().enumerate() {
        for b in &ROUTES[i + 1..] {
            assert_ne!(a.path, b.path);
        }
    }
}

#[test]
fn route_entry_serializes_label_and_path() {
    let json = serde_json::to_value(ROUTES[1]).unwrap();
    assert_eq!(json, serde_json::json!({ "label": "Câmeras", "path": "/cams" }));
}

#[test]
fn segments_drop_the_leading_slash() {
    assert_eq!(HOME.segment(), "");
    assert_eq!(CAMERAS.segment(), "cams");
    assert_eq!(USERS.segment(), "users");
}
