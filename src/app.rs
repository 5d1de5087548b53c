//! Root application component with routing, session context, and the guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_menu::NavMenu;
use crate::components::require_session::RequireSession;
use crate::pages::{
    categories::CategoriesPage, contracts::ContractsPage, dashboard::DashboardPage,
    invoices::InvoicesPage, login::LoginPage, orders::OrdersPage, payments::PaymentsPage,
    products::ProductsPage, returns::ReturnsPage, suppliers::SuppliersPage,
};
use crate::session::context::SessionContext;
use crate::util::lang::{self, Lang};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session manager for this page load and sets up client-side
/// routing. Every route except `/login` sits behind `RequireSession`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new();
    let lang = RwSignal::new(Lang::default());
    provide_context(session);
    provide_context(lang);

    // Effects only run in the browser, so SSR output stays on the guard's
    // placeholder until the stored credential is resolved client-side.
    Effect::new(move || {
        session.initialize();
        lang.set(lang::read_preference());
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/procure-ui.css"/>
        <Title text="Procurement Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected><DashboardPage/></Protected> }
                />
                <Route
                    path=StaticSegment("categories")
                    view=|| view! { <Protected><CategoriesPage/></Protected> }
                />
                <Route
                    path=StaticSegment("products")
                    view=|| view! { <Protected><ProductsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("suppliers")
                    view=|| view! { <Protected><SuppliersPage/></Protected> }
                />
                <Route
                    path=StaticSegment("orders")
                    view=|| view! { <Protected><OrdersPage/></Protected> }
                />
                <Route
                    path=StaticSegment("invoices")
                    view=|| view! { <Protected><InvoicesPage/></Protected> }
                />
                <Route
                    path=StaticSegment("payments")
                    view=|| view! { <Protected><PaymentsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("contracts")
                    view=|| view! { <Protected><ContractsPage/></Protected> }
                />
                <Route
                    path=StaticSegment("returns")
                    view=|| view! { <Protected><ReturnsPage/></Protected> }
                />
            </Routes>
        </Router>
    }
}

/// Guard + chrome around every protected page.
#[component]
fn Protected(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireSession>
            <div class="layout">
                <NavMenu/>
                <main class="layout__content">{children()}</main>
            </div>
        </RequireSession>
    }
}
