//! Dashboard pages.
//!
//! DESIGN
//! ======
//! Each page owns its own DTOs and fetch functions; nothing here is shared
//! between pages beyond the generic helpers in `net::api`. Pages fetch on
//! mount via `LocalResource` and degrade to an empty table plus a notice
//! when the backend fails.

pub mod categories;
pub mod contracts;
pub mod dashboard;
pub mod invoices;
pub mod login;
pub mod orders;
pub mod payments;
pub mod products;
pub mod returns;
pub mod suppliers;
