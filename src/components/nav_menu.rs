//! Sidebar navigation filtered to the current role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::nav;
use crate::session::context::SessionContext;
use crate::util::lang::{self, Lang};

/// Menu links the resolved role is allowed to see, plus the signed-in
/// subject, the language toggle, and sign-out.
#[component]
pub fn NavMenu() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let status = session.status_signal();
    let lang = expect_context::<RwSignal<Lang>>();
    let navigate = use_navigate();

    let subject = move || {
        status
            .get()
            .identity
            .map(|identity| format!("{} ({})", identity.subject, identity.role.label()))
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions::default());
    };

    let on_lang = move |_| lang.set(lang::toggle(lang.get_untracked()));

    view! {
        <nav class="nav-menu">
            <div class="nav-menu__brand">"Procurement Console"</div>
            <ul class="nav-menu__links">
                {move || {
                    nav::visible_routes(status.get().role())
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <li class="nav-menu__item">
                                    <a href=entry.path>{entry.label}</a>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <div class="nav-menu__footer">
                <span class="nav-menu__subject">{subject}</span>
                <button class="nav-menu__lang" on:click=on_lang>
                    {move || lang.get().as_str().to_uppercase()}
                </button>
                <button class="nav-menu__logout" on:click=on_logout>
                    "Sign out"
                </button>
            </div>
        </nav>
    }
}
