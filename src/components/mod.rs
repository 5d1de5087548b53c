//! Reusable UI building blocks shared across pages.

pub mod nav_menu;
pub mod notice;
pub mod page_header;
pub mod require_session;
