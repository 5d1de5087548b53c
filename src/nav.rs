//! Static navigation table and the role-based filter over it.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::session::claims::Role;

/// Navigation entry with its role allow-list.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub label: &'static str,
    pub allowed: &'static [Role],
}

const EVERYONE: &[Role] = &[Role::User, Role::Admin];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Menu table, in display order. The route guard protects every path here;
/// this table only decides which links a role gets to see.
pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/",
        label: "Dashboard",
        allowed: EVERYONE,
    },
    RouteEntry {
        path: "/categories",
        label: "Categories",
        allowed: ADMIN_ONLY,
    },
    RouteEntry {
        path: "/products",
        label: "Products",
        allowed: EVERYONE,
    },
    RouteEntry {
        path: "/suppliers",
        label: "Suppliers",
        allowed: EVERYONE,
    },
    RouteEntry {
        path: "/orders",
        label: "Purchase Orders",
        allowed: EVERYONE,
    },
    RouteEntry {
        path: "/invoices",
        label: "Invoices",
        allowed: ADMIN_ONLY,
    },
    RouteEntry {
        path: "/payments",
        label: "Payments",
        allowed: ADMIN_ONLY,
    },
    RouteEntry {
        path: "/contracts",
        label: "Contracts",
        allowed: ADMIN_ONLY,
    },
    RouteEntry {
        path: "/returns",
        label: "Returns",
        allowed: EVERYONE,
    },
];

/// Entries visible to `role`, preserving table order.
///
/// An absent role (anonymous or unresolved session) sees an empty menu; that
/// is a normal state, not an error.
pub fn visible_routes(role: Option<Role>) -> Vec<&'static RouteEntry> {
    let Some(role) = role else {
        return Vec::new();
    };
    ROUTES
        .iter()
        .filter(|entry| entry.allowed.contains(&role))
        .collect()
}
