//! Small cross-page utilities: CSV export, aggregation, formatting, and the
//! interface language preference.

pub mod aggregate;
pub mod csv;
pub mod format;
pub mod lang;
