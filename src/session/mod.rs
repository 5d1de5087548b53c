//! Client-side session core: credential storage, claim decoding, and the
//! login/logout state machine.
//!
//! TRUST BOUNDARY
//! ==============
//! The decoder reads claims out of the bearer token without verifying any
//! signature. The decoded identity is advisory: it decides which links and
//! screens the UI shows, nothing more. Every backend call still carries the
//! raw credential and the backend re-authorizes it, so a tampered token buys
//! an attacker a menu they cannot use.

pub mod claims;
pub mod context;
pub mod guard;
pub mod manager;
pub mod token;
