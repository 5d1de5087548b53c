//! Supplier contract list page.

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::csv;

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct Contract {
    id: i64,
    #[serde(default)]
    supplier_name: String,
    #[serde(default)]
    start_date: String,
    #[serde(default)]
    end_date: String,
    #[serde(default)]
    status: String,
}

async fn fetch_contracts(error: RwSignal<Option<String>>) -> Vec<Contract> {
    match api::get_json("/api/contracts").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load contracts.".to_owned()));
            Vec::new()
        }
    }
}

#[component]
pub fn ContractsPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let contracts = LocalResource::new(move || fetch_contracts(error));

    let export = move |_| {
        if let Some(list) = contracts.get() {
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|c| {
                    vec![
                        c.id.to_string(),
                        c.supplier_name.clone(),
                        c.start_date.clone(),
                        c.end_date.clone(),
                        c.status.clone(),
                    ]
                })
                .collect();
            csv::download(
                "contracts.csv",
                &csv::build(&["id", "supplier", "start", "end", "status"], &rows),
            );
        }
    };

    view! {
        <div class="page page--contracts">
            <PageHeader title="Contracts">
                <button class="btn" on:click=export>
                    "Export CSV"
                </button>
            </PageHeader>
            <Notice message=error/>
            <Suspense fallback=move || view! { <p>"Loading contracts..."</p> }>
                {move || {
                    contracts
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Supplier"</th>
                                            <th>"Start"</th>
                                            <th>"End"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|c| {
                                                view! {
                                                    <tr>
                                                        <td>{c.supplier_name}</td>
                                                        <td>{c.start_date}</td>
                                                        <td>{c.end_date}</td>
                                                        <td>{c.status}</td>
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
