//! HTTP plumbing for the procurement backend.

pub mod api;
