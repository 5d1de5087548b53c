//! Advisory claim decoding for bearer credentials.
//!
//! The credential is expected to look like a JWT (`header.payload.signature`
//! with base64url segments), but only the payload is read and the signature
//! is ignored entirely. Verification is the backend's job.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine;
use serde::Deserialize;

/// Failure decoding a stored credential.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The credential is not a parseable token, or its claims lack a subject
    /// or a known role.
    #[error("malformed credential")]
    MalformedCredential,
}

/// Role claim carried in the credential. Closed set: adding a role is a
/// compile-time-checked change everywhere a role is matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, serde::Serialize)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

/// Subject + role extracted from a credential. Advisory only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub subject: String,
    pub role: Role,
}

#[derive(Deserialize)]
struct Claims {
    sub: String,
    role: Role,
}

/// Decode the claims segment of a bearer credential.
///
/// # Errors
///
/// `MalformedCredential` when the string is not three dot-separated
/// segments, the payload is not base64url-without-padding JSON, or the
/// `sub`/`role` claims are missing or unknown.
pub fn decode(credential: &str) -> Result<Identity, SessionError> {
    let mut segments = credential.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(SessionError::MalformedCredential),
    };

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| SessionError::MalformedCredential)?;
    let claims: Claims =
        serde_json::from_slice(&bytes).map_err(|_| SessionError::MalformedCredential)?;

    Ok(Identity {
        subject: claims.sub,
        role: claims.role,
    })
}
