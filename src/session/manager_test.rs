use super::*;
use crate::session::claims::{Identity, Role, SessionError};
use crate::session::token::{MemoryTokenStore, TokenStore};

use base64::Engine;

fn credential(sub: &str, role: &str) -> String {
    let encode = |s: &str| base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(s);
    format!(
        "{}.{}.{}",
        encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        encode(&format!(r#"{{"sub":"{sub}","role":"{role}"}}"#)),
        encode("sig")
    )
}

fn manager_with_store() -> (SessionManager<MemoryTokenStore>, MemoryTokenStore) {
    let store = MemoryTokenStore::default();
    (SessionManager::new(store.clone()), store)
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn empty_store_resolves_anonymous_and_ready() {
    let (mut manager, _store) = manager_with_store();
    assert!(!manager.status().ready);

    manager.initialize();
    assert!(manager.status().ready);
    assert!(manager.status().identity.is_none());
}

#[test]
fn stored_credential_resolves_authenticated() {
    let (mut manager, store) = manager_with_store();
    store.set(&credential("alice@example.com", "Admin"));

    manager.initialize();
    let status = manager.status();
    assert!(status.ready);
    assert_eq!(
        status.identity,
        Some(Identity {
            subject: "alice@example.com".to_owned(),
            role: Role::Admin,
        })
    );
}

#[test]
fn malformed_stored_credential_is_cleared() {
    let (mut manager, store) = manager_with_store();
    store.set("garbage");

    manager.initialize();
    assert!(manager.status().ready);
    assert!(manager.status().identity.is_none());
    assert!(store.get().is_none());
}

#[test]
fn initialize_after_ready_is_a_noop() {
    let (mut manager, store) = manager_with_store();
    manager.initialize();

    // A credential appearing after the initial read is not picked up; the
    // ready transition happens once per page load.
    store.set(&credential("bob", "User"));
    manager.initialize();
    assert!(manager.status().identity.is_none());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn login_with_valid_credential_authenticates() {
    let (mut manager, store) = manager_with_store();
    manager.initialize();

    manager.login(&credential("alice@example.com", "Admin")).unwrap();
    let status = manager.status();
    assert_eq!(status.role(), Some(Role::Admin));
    assert_eq!(
        status.identity.as_ref().map(|i| i.subject.as_str()),
        Some("alice@example.com")
    );
    assert!(store.get().is_some());
}

#[test]
fn login_with_malformed_credential_fails_and_clears_store() {
    let (mut manager, store) = manager_with_store();
    manager.initialize();

    let err = manager.login("not-a-token").unwrap_err();
    assert_eq!(err, SessionError::MalformedCredential);
    assert!(manager.status().identity.is_none());
    assert!(store.get().is_none());
}

#[test]
fn login_then_logout_leaves_store_empty() {
    let (mut manager, store) = manager_with_store();
    manager.initialize();

    manager.login(&credential("bob", "User")).unwrap();
    manager.logout();

    assert!(store.get().is_none());
    assert!(manager.status().identity.is_none());
    assert!(manager.status().ready);
}

#[test]
fn failed_login_keeps_session_anonymous_not_unready() {
    let (mut manager, _store) = manager_with_store();
    manager.initialize();

    let _ = manager.login("x.y");
    assert!(manager.status().ready);
    assert!(manager.status().identity.is_none());
}
