//! Session state machine: Uninitialized, Anonymous, or Authenticated.

#[cfg(test)]
#[path = "manager_test.rs"]
mod manager_test;

use super::claims::{self, Identity, Role, SessionError};
use super::token::TokenStore;

/// Observable session snapshot.
///
/// `ready` flips from `false` to `true` exactly once, after the initial
/// credential read. Consumers must not branch on `identity` while `ready`
/// is still `false`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStatus {
    pub identity: Option<Identity>,
    pub ready: bool,
}

impl SessionStatus {
    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|identity| identity.role)
    }
}

/// Session state machine over a credential store.
///
/// One instance lives for the duration of a page load, owned by the root
/// component and mutated only through `initialize`/`login`/`logout`. The
/// identity invariant: `identity` is `Some` iff the last decode of the
/// stored credential succeeded.
#[derive(Debug)]
pub struct SessionManager<S> {
    store: S,
    status: SessionStatus,
}

impl<S: TokenStore> SessionManager<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            status: SessionStatus::default(),
        }
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    /// Read the store once and resolve to Anonymous or Authenticated.
    ///
    /// A stored credential that fails to decode is removed so it is not
    /// retried on every page load. Calling again after the session is ready
    /// is a no-op.
    pub fn initialize(&mut self) {
        if self.status.ready {
            return;
        }
        if let Some(credential) = self.store.get() {
            match claims::decode(&credential) {
                Ok(identity) => self.status.identity = Some(identity),
                Err(_) => self.store.clear(),
            }
        }
        self.status.ready = true;
    }

    /// Persist a fresh credential and decode it.
    ///
    /// # Errors
    ///
    /// On decode failure the store is cleared again, the session stays
    /// Anonymous, and the error is surfaced to the caller.
    pub fn login(&mut self, credential: &str) -> Result<(), SessionError> {
        self.store.set(credential);
        match claims::decode(credential) {
            Ok(identity) => {
                self.status.identity = Some(identity);
                self.status.ready = true;
                Ok(())
            }
            Err(err) => {
                self.store.clear();
                self.status.identity = None;
                Err(err)
            }
        }
    }

    /// Drop the credential and the identity, back to Anonymous.
    pub fn logout(&mut self) {
        self.store.clear();
        self.status.identity = None;
        self.status.ready = true;
    }
}
