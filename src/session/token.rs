//! Credential storage backed by browser `localStorage`.

/// Storage key holding the bearer credential for this origin.
#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "procure_ui_token";

/// Persistent store for the single bearer credential.
///
/// Implementations do no validation and enforce no expiry: an
/// expired-but-present credential is still returned and only dies once the
/// backend rejects it on a later call.
pub trait TokenStore {
    fn get(&self) -> Option<String>;
    fn set(&self, credential: &str);
    fn clear(&self);
}

/// `TokenStore` over `localStorage`, scoped to the page origin.
///
/// Outside the browser (SSR) reads return `None` and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set(&self, credential: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(TOKEN_KEY, credential);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credential;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
        }
    }
}

/// In-memory store so the state machine tests can observe what the session
/// manager persisted. Clones share the same slot.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryTokenStore(std::rc::Rc<std::cell::RefCell<Option<String>>>);

#[cfg(test)]
impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set(&self, credential: &str) {
        *self.0.borrow_mut() = Some(credential.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}
