use super::*;
use crate::session::claims::Role;

#[test]
fn absent_role_sees_nothing() {
    assert!(visible_routes(None).is_empty());
}

#[test]
fn admin_sees_the_whole_table() {
    let visible = visible_routes(Some(Role::Admin));
    assert_eq!(visible.len(), ROUTES.len());
}

#[test]
fn user_menu_is_a_subset_of_admin_menu() {
    let admin: Vec<&str> = visible_routes(Some(Role::Admin))
        .iter()
        .map(|entry| entry.path)
        .collect();
    let user = visible_routes(Some(Role::User));

    assert!(!user.is_empty());
    for entry in user {
        assert!(admin.contains(&entry.path));
    }
}

#[test]
fn user_menu_preserves_table_order() {
    let user: Vec<&str> = visible_routes(Some(Role::User))
        .iter()
        .map(|entry| entry.path)
        .collect();
    let table_order: Vec<&str> = ROUTES
        .iter()
        .filter(|entry| entry.allowed.contains(&Role::User))
        .map(|entry| entry.path)
        .collect();
    assert_eq!(user, table_order);
}

#[test]
fn admin_menu_includes_every_admin_allowed_entry() {
    let visible = visible_routes(Some(Role::Admin));
    for entry in ROUTES {
        if entry.allowed.contains(&Role::Admin) {
            assert!(visible.iter().any(|e| e.path == entry.path));
        }
    }
}

#[test]
fn user_never_sees_admin_only_entries() {
    let user = visible_routes(Some(Role::User));
    assert!(user.iter().all(|entry| entry.allowed.contains(&Role::User)));
    assert!(!user.iter().any(|entry| entry.path == "/invoices"));
}
