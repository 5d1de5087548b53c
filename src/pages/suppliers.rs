//! Supplier directory page.

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::csv;

/// Supplier record as returned by `GET /api/suppliers`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct Supplier {
    id: i64,
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: String,
}

async fn fetch_suppliers(error: RwSignal<Option<String>>) -> Vec<Supplier> {
    match api::get_json("/api/suppliers").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load suppliers.".to_owned()));
            Vec::new()
        }
    }
}

/// Supplier list with CSV export.
#[component]
pub fn SuppliersPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let suppliers = LocalResource::new(move || fetch_suppliers(error));

    let export = move |_| {
        if let Some(list) = suppliers.get() {
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|s| {
                    vec![
                        s.id.to_string(),
                        s.name.clone(),
                        s.email.clone(),
                        s.phone.clone(),
                        s.address.clone(),
                    ]
                })
                .collect();
            csv::download(
                "suppliers.csv",
                &csv::build(&["id", "name", "email", "phone", "address"], &rows),
            );
        }
    };

    view! {
        <div class="page page--suppliers">
            <PageHeader title="Suppliers">
                <button class="btn" on:click=export>
                    "Export CSV"
                </button>
            </PageHeader>
            <Notice message=error/>
            <Suspense fallback=move || view! { <p>"Loading suppliers..."</p> }>
                {move || {
                    suppliers
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Email"</th>
                                            <th>"Phone"</th>
                                            <th>"Address"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|s| {
                                                view! {
                                                    <tr>
                                                        <td>{s.name}</td>
                                                        <td>{s.email}</td>
                                                        <td>{s.phone}</td>
                                                        <td>{s.address}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </tbody>
                                </table>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
