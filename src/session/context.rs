//! Leptos wiring for the session manager.

use leptos::prelude::*;

use super::claims::SessionError;
use super::manager::{SessionManager, SessionStatus};
use super::token::BrowserTokenStore;

/// Session handle provided via context to the whole render tree.
///
/// Owns the single `SessionManager` instance for this page load and mirrors
/// its status into a signal so the guard and the navigation react to
/// `login`/`logout`. All mutation funnels through the methods here; nothing
/// else touches the token store.
#[derive(Clone, Copy)]
pub struct SessionContext {
    manager: StoredValue<SessionManager<BrowserTokenStore>>,
    status: RwSignal<SessionStatus>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            manager: StoredValue::new(SessionManager::new(BrowserTokenStore)),
            status: RwSignal::new(SessionStatus::default()),
        }
    }

    /// Current snapshot, tracked reactively.
    pub fn status(&self) -> SessionStatus {
        self.status.get()
    }

    /// The underlying status signal, for components that subscribe.
    pub fn status_signal(&self) -> RwSignal<SessionStatus> {
        self.status
    }

    /// Resolve the stored credential. Safe to call more than once; only the
    /// first call does anything.
    pub fn initialize(&self) {
        self.manager.update_value(SessionManager::initialize);
        self.sync();
    }

    /// Store and decode a fresh credential from the login flow.
    ///
    /// # Errors
    ///
    /// `MalformedCredential` when the token cannot be decoded; the session
    /// stays anonymous and the store is left empty.
    pub fn login(&self, credential: &str) -> Result<(), SessionError> {
        let mut result = Ok(());
        self.manager
            .update_value(|manager| result = manager.login(credential));
        self.sync();
        result
    }

    /// Drop the credential and return to the anonymous state.
    pub fn logout(&self) {
        self.manager.update_value(SessionManager::logout);
        self.sync();
    }

    fn sync(&self) {
        let status = self.manager.with_value(|manager| manager.status().clone());
        self.status.set(status);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
