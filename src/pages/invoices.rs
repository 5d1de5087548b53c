//! Invoice list page.

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::{csv, format};

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct Invoice {
    id: i64,
    #[serde(default)]
    order_id: i64,
    #[serde(default)]
    invoice_date: String,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    status: String,
}

async fn fetch_invoices(error: RwSignal<Option<String>>) -> Vec<Invoice> {
    match api::get_json("/api/invoices").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load invoices.".to_owned()));
            Vec::new()
        }
    }
}

#[component]
pub fn InvoicesPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let invoices = LocalResource::new(move || fetch_invoices(error));

    let export = move |_| {
        if let Some(list) = invoices.get() {
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|i| {
                    vec![
                        i.id.to_string(),
                        i.order_id.to_string(),
                        i.invoice_date.clone(),
                        format::money(i.amount),
                        i.status.clone(),
                    ]
                })
                .collect();
            csv::download(
                "invoices.csv",
                &csv::build(&["id", "order", "date", "amount", "status"], &rows),
            );
        }
    };

    view! {
        <div class="page page--invoices">
            <PageHeader title="Invoices">
                <button class="btn" on:click=export>
                    "Export CSV"
                </button>
            </PageHeader>
            <Notice message=error/>
            <Suspense fallback=move || view! { <p>"Loading invoices..."</p> }>
                {move || {
                    invoices
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Invoice"</th>
                                            <th>"Order"</th>
                                            <th>"Date"</th>
                                            <th>"Amount"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|i| {
                                                view! {
                                                    <tr>
                                                        <td>{format!("#{}", i.id)}</td>
                                                        <td>{format!("#{}", i.order_id)}</td>
                                                        <td>{i.invoice_date}</td>
                                                        <td class="data-table__amount">
                                                            {format::money(i.amount)}
                                                        </td>
                                                        <td>{i.status}</td>
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
