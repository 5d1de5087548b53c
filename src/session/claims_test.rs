use super::*;

use base64::Engine;

fn encode(segment: &str) -> String {
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(segment)
}

fn token(payload: &str) -> String {
    format!(
        "{}.{}.{}",
        encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        encode(payload),
        encode("signature-is-ignored")
    )
}

// =============================================================
// Accepted credentials
// =============================================================

#[test]
fn decode_admin_credential() {
    let cred = token(r#"{"sub":"alice@example.com","role":"Admin"}"#);
    let identity = decode(&cred).unwrap();
    assert_eq!(identity.subject, "alice@example.com");
    assert_eq!(identity.role, Role::Admin);
}

#[test]
fn decode_user_credential() {
    let cred = token(r#"{"sub":"bob","role":"User"}"#);
    let identity = decode(&cred).unwrap();
    assert_eq!(identity.subject, "bob");
    assert_eq!(identity.role, Role::User);
}

#[test]
fn decode_ignores_extra_claims() {
    let cred = token(r#"{"sub":"carol","role":"User","exp":1234567890,"iss":"backend"}"#);
    assert!(decode(&cred).is_ok());
}

// =============================================================
// Rejected credentials
// =============================================================

#[test]
fn decode_rejects_plain_string() {
    assert_eq!(decode("not-a-token"), Err(SessionError::MalformedCredential));
}

#[test]
fn decode_rejects_two_segments() {
    let cred = format!("{}.{}", encode("a"), encode("b"));
    assert_eq!(decode(&cred), Err(SessionError::MalformedCredential));
}

#[test]
fn decode_rejects_four_segments() {
    let cred = format!("{0}.{0}.{0}.{0}", encode("a"));
    assert_eq!(decode(&cred), Err(SessionError::MalformedCredential));
}

#[test]
fn decode_rejects_invalid_base64_payload() {
    let cred = format!("{}.!!not-base64!!.{}", encode("h"), encode("s"));
    assert_eq!(decode(&cred), Err(SessionError::MalformedCredential));
}

#[test]
fn decode_rejects_non_json_payload() {
    let cred = token("just some text");
    assert_eq!(decode(&cred), Err(SessionError::MalformedCredential));
}

#[test]
fn decode_rejects_missing_subject() {
    let cred = token(r#"{"role":"Admin"}"#);
    assert_eq!(decode(&cred), Err(SessionError::MalformedCredential));
}

#[test]
fn decode_rejects_missing_role() {
    let cred = token(r#"{"sub":"alice@example.com"}"#);
    assert_eq!(decode(&cred), Err(SessionError::MalformedCredential));
}

#[test]
fn decode_rejects_unknown_role() {
    let cred = token(r#"{"sub":"mallory","role":"Root"}"#);
    assert_eq!(decode(&cred), Err(SessionError::MalformedCredential));
}
