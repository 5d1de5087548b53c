//! Route guard component gating protected pages behind a resolved session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::session::context::SessionContext;
use crate::session::guard::{self, GuardOutcome};

/// Wraps every protected page.
///
/// While the session is unresolved this renders a neutral placeholder and
/// never navigates. Once resolved, an anonymous viewer is sent to `/login`
/// exactly once; an authenticated viewer gets the children.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let status = session.status_signal();
    let redirected = RwSignal::new(false);
    let navigate = use_navigate();

    Effect::new(move || {
        if guard::evaluate(&status.get(), redirected.get_untracked()) == GuardOutcome::Redirect {
            redirected.set(true);
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        {move || match guard::evaluate(&status.get(), redirected.get()) {
            GuardOutcome::Loading => {
                view! { <p class="guard-placeholder">"Loading session..."</p> }.into_any()
            }
            GuardOutcome::Render => children().into_any(),
            GuardOutcome::Redirect | GuardOutcome::Blocked => ().into_any(),
        }}
    }
}
