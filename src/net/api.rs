//! Generic REST helpers for the procurement backend.
//!
//! Client-side (hydrate): real HTTP via `gloo-net` with the bearer
//! credential attached, and the fetch aborted if the owning view goes away.
//! Server-side (SSR): stubs that fail immediately; list pages stay on their
//! loading fallback until hydration.
//!
//! ERROR HANDLING
//! ==============
//! Any transport failure or non-2xx status collapses into `ApiError`; the
//! backend guarantees no error-body schema, so callers treat every failure
//! the same way: degrade to empty data plus a dismissible notice. Nothing is
//! retried and nothing panics.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use crate::session::token::{BrowserTokenStore, TokenStore};

/// Request failure surfaced to pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Transport error or non-2xx response.
    #[error("request failed")]
    Network,
    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response body")]
    Decode,
}

/// Cancels the underlying browser fetch when dropped.
///
/// Every request future holds one of these, so when a view unmounts and its
/// `LocalResource` drops the in-flight future, the fetch is aborted and a
/// stale response can never be applied to a dead view.
#[cfg(feature = "hydrate")]
struct AbortGuard {
    controller: web_sys::AbortController,
}

#[cfg(feature = "hydrate")]
impl AbortGuard {
    fn new() -> Option<Self> {
        web_sys::AbortController::new()
            .ok()
            .map(|controller| Self { controller })
    }

    fn signal(&self) -> web_sys::AbortSignal {
        self.controller.signal()
    }
}

#[cfg(feature = "hydrate")]
impl Drop for AbortGuard {
    fn drop(&mut self) {
        // Aborting an already-settled fetch is a no-op.
        self.controller.abort();
    }
}

/// GET `path` (e.g. `/api/products`) and deserialize the JSON body.
///
/// # Errors
///
/// `Network` on transport failure or non-2xx, `Decode` on a body that does
/// not match `T`.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let guard = AbortGuard::new();
        let mut request = gloo_net::http::Request::get(path);
        if let Some(guard) = &guard {
            request = request.abort_signal(Some(&guard.signal()));
        }
        if let Some(token) = BrowserTokenStore.get() {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(|_| ApiError::Network)?;
        if !response.ok() {
            log::warn!("GET {path} failed with status {}", response.status());
            return Err(ApiError::Network);
        }
        response.json::<T>().await.map_err(|_| ApiError::Decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network)
    }
}

/// POST a JSON `body` to `path` and deserialize the JSON response.
///
/// # Errors
///
/// Same taxonomy as [`get_json`]; a body that fails to serialize is also a
/// `Network` failure from the caller's point of view.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let guard = AbortGuard::new();
        let mut builder = gloo_net::http::Request::post(path);
        if let Some(guard) = &guard {
            builder = builder.abort_signal(Some(&guard.signal()));
        }
        if let Some(token) = BrowserTokenStore.get() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        let request = builder.json(body).map_err(|_| ApiError::Network)?;
        let response = request.send().await.map_err(|_| ApiError::Network)?;
        if !response.ok() {
            log::warn!("POST {path} failed with status {}", response.status());
            return Err(ApiError::Network);
        }
        response.json::<T>().await.map_err(|_| ApiError::Decode)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network)
    }
}
