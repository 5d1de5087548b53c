//! Landing page with purchasing summary cards.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::{aggregate, format};

/// Slim order projection; only what the summary cards need.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct OrderSummary {
    status: String,
    #[serde(default)]
    total: f64,
}

/// Slim invoice projection for the outstanding-amount card.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct InvoiceSummary {
    status: String,
    #[serde(default)]
    amount: f64,
}

async fn fetch_orders(error: RwSignal<Option<String>>) -> Vec<OrderSummary> {
    match api::get_json("/api/orders").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load purchase orders.".to_owned()));
            Vec::new()
        }
    }
}

async fn fetch_invoices(error: RwSignal<Option<String>>) -> Vec<InvoiceSummary> {
    match api::get_json("/api/invoices").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load invoices.".to_owned()));
            Vec::new()
        }
    }
}

/// Sum of invoice amounts not yet marked paid.
fn outstanding_amount(invoices: &[InvoiceSummary]) -> f64 {
    aggregate::sum_where(invoices, |invoice| invoice.status != "Paid", |invoice| {
        invoice.amount
    })
}

/// Dashboard page: order counts by status plus the unpaid invoice total.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let orders = LocalResource::new(move || fetch_orders(error));
    let invoices = LocalResource::new(move || fetch_invoices(error));

    view! {
        <div class="page page--dashboard">
            <PageHeader title="Dashboard"/>
            <Notice message=error/>
            <Suspense fallback=move || view! { <p>"Loading summary..."</p> }>
                <div class="dashboard__cards">
                    {move || {
                        orders
                            .get()
                            .map(|list| {
                                let by_status = aggregate::count_by(
                                    list.iter().map(|order| order.status.as_str()),
                                );
                                view! {
                                    <div class="card">
                                        <h2>"Orders"</h2>
                                        <p class="card__value">{list.len()}</p>
                                        <ul class="card__breakdown">
                                            {by_status
                                                .into_iter()
                                                .map(|(status, count)| {
                                                    view! {
                                                        <li>{format!("{status}: {count}")}</li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                            })
                    }}
                    {move || {
                        invoices
                            .get()
                            .map(|list| {
                                let unpaid = outstanding_amount(&list);
                                view! {
                                    <div class="card">
                                        <h2>"Outstanding invoices"</h2>
                                        <p class="card__value">{format::money(unpaid)}</p>
                                        <p class="card__hint">
                                            {format!("{} invoices on file", list.len())}
                                        </p>
                                    </div>
                                }
                            })
                    }}
                </div>
            </Suspense>
        </div>
    }
}
