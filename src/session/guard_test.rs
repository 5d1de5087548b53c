use super::*;
use crate::session::claims::{Identity, Role};
use crate::session::manager::SessionStatus;

fn anonymous(ready: bool) -> SessionStatus {
    SessionStatus {
        identity: None,
        ready,
    }
}

fn authenticated() -> SessionStatus {
    SessionStatus {
        identity: Some(Identity {
            subject: "alice@example.com".to_owned(),
            role: Role::Admin,
        }),
        ready: true,
    }
}

#[test]
fn unresolved_session_never_redirects() {
    assert_eq!(evaluate(&anonymous(false), false), GuardOutcome::Loading);
    assert_eq!(evaluate(&anonymous(false), true), GuardOutcome::Loading);

    // Even a present identity waits for the ready flag.
    let mut status = authenticated();
    status.ready = false;
    assert_eq!(evaluate(&status, false), GuardOutcome::Loading);
}

#[test]
fn resolved_authenticated_renders() {
    assert_eq!(evaluate(&authenticated(), false), GuardOutcome::Render);
    assert_eq!(evaluate(&authenticated(), true), GuardOutcome::Render);
}

#[test]
fn resolved_anonymous_redirects_exactly_once() {
    assert_eq!(evaluate(&anonymous(true), false), GuardOutcome::Redirect);
    // Re-entering the same state after the redirect is a no-op.
    assert_eq!(evaluate(&anonymous(true), true), GuardOutcome::Blocked);
}
