//! Redirect rule for protected routes.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::manager::SessionStatus;

/// What the route guard should do for a given session snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session not resolved yet: show a neutral placeholder, never navigate.
    Loading,
    /// Resolved and authenticated: render the protected content.
    Render,
    /// Resolved, anonymous, not yet redirected: navigate to the login page.
    Redirect,
    /// Already redirected once: render nothing and do not navigate again.
    Blocked,
}

/// Pure redirect decision. `already_redirected` keeps the guard idempotent:
/// re-evaluating the same anonymous status never produces a second redirect.
pub fn evaluate(status: &SessionStatus, already_redirected: bool) -> GuardOutcome {
    if !status.ready {
        return GuardOutcome::Loading;
    }
    if status.identity.is_some() {
        GuardOutcome::Render
    } else if already_redirected {
        GuardOutcome::Blocked
    } else {
        GuardOutcome::Redirect
    }
}
