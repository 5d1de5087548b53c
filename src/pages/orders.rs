//! Purchase order list page.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::{csv, format};

/// Order lifecycle as reported by the backend. The backend owns the
/// transitions; unknown strings render as-is rather than failing the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum OrderStatus {
    Pending,
    Approved,
    Received,
    Cancelled,
}

impl OrderStatus {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(OrderStatus::Pending),
            "Approved" => Some(OrderStatus::Approved),
            "Received" => Some(OrderStatus::Received),
            "Cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    fn css_class(self) -> &'static str {
        match self {
            OrderStatus::Pending => "badge badge--pending",
            OrderStatus::Approved => "badge badge--approved",
            OrderStatus::Received => "badge badge--received",
            OrderStatus::Cancelled => "badge badge--cancelled",
        }
    }
}

/// Purchase order record as returned by `GET /api/orders`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct PurchaseOrder {
    id: i64,
    #[serde(default)]
    supplier_name: String,
    #[serde(default)]
    order_date: String,
    #[serde(default)]
    status: String,
    #[serde(default)]
    total: f64,
}

async fn fetch_orders(error: RwSignal<Option<String>>) -> Vec<PurchaseOrder> {
    match api::get_json("/api/orders").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load purchase orders.".to_owned()));
            Vec::new()
        }
    }
}

/// Purchase order list with status badges and CSV export.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let orders = LocalResource::new(move || fetch_orders(error));

    let export = move |_| {
        if let Some(list) = orders.get() {
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|o| {
                    vec![
                        o.id.to_string(),
                        o.supplier_name.clone(),
                        o.order_date.clone(),
                        o.status.clone(),
                        format::money(o.total),
                    ]
                })
                .collect();
            csv::download(
                "purchase-orders.csv",
                &csv::build(&["id", "supplier", "date", "status", "total"], &rows),
            );
        }
    };

    view! {
        <div class="page page--orders">
            <PageHeader title="Purchase Orders">
                <button class="btn" on:click=export>
                    "Export CSV"
                </button>
            </PageHeader>
            <Notice message=error/>
            <Suspense fallback=move || view! { <p>"Loading orders..."</p> }>
                {move || {
                    orders
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Order"</th>
                                            <th>"Supplier"</th>
                                            <th>"Date"</th>
                                            <th>"Status"</th>
                                            <th>"Total"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|o| {
                                                let badge = OrderStatus::parse(&o.status)
                                                    .map_or("badge", OrderStatus::css_class);
                                                view! {
                                                    <tr>
                                                        <td>{format!("#{}", o.id)}</td>
                                                        <td>{o.supplier_name}</td>
                                                        <td>{o.order_date}</td>
                                                        <td>
                                                            <span class=badge>{o.status}</span>
                                                        </td>
                                                        <td class="data-table__amount">
                                                            {format::money(o.total)}
                                                        </td>
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
