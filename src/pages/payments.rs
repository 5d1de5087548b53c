//! Payment history page.

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::{csv, format};

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct Payment {
    id: i64,
    #[serde(default)]
    invoice_id: i64,
    #[serde(default)]
    paid_date: String,
    #[serde(default)]
    amount: f64,
    #[serde(default)]
    method: String,
}

async fn fetch_payments(error: RwSignal<Option<String>>) -> Vec<Payment> {
    match api::get_json("/api/payments").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load payments.".to_owned()));
            Vec::new()
        }
    }
}

#[component]
pub fn PaymentsPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let payments = LocalResource::new(move || fetch_payments(error));

    let export = move |_| {
        if let Some(list) = payments.get() {
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|p| {
                    vec![
                        p.id.to_string(),
                        p.invoice_id.to_string(),
                        p.paid_date.clone(),
                        format::money(p.amount),
                        p.method.clone(),
                    ]
                })
                .collect();
            csv::download(
                "payments.csv",
                &csv::build(&["id", "invoice", "date", "amount", "method"], &rows),
            );
        }
    };

    view! {
        <div class="page page--payments">
            <PageHeader title="Payments">
                <button class="btn" on:click=export>
                    "Export CSV"
                </button>
            </PageHeader>
            <Notice message=error/>
            <Suspense fallback=move || view! { <p>"Loading payments..."</p> }>
                {move || {
                    payments
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Payment"</th>
                                            <th>"Invoice"</th>
                                            <th>"Date"</th>
                                            <th>"Amount"</th>
                                            <th>"Method"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|p| {
                                                view! {
                                                    <tr>
                                                        <td>{format!("#{}", p.id)}</td>
                                                        <td>{format!("#{}", p.invoice_id)}</td>
                                                        <td>{p.paid_date}</td>
                                                        <td class="data-table__amount">
                                                            {format::money(p.amount)}
                                                        </td>
                                                        <td>{p.method}</td>
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
