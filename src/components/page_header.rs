//! Page title bar with an optional action slot.

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <div class="page-header__actions">{children.map(|children| children())}</div>
        </header>
    }
}
