//! Goods return list page.

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::csv;

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct ReturnSlip {
    id: i64,
    #[serde(default)]
    order_id: i64,
    #[serde(default)]
    created_date: String,
    #[serde(default)]
    reason: String,
    #[serde(default)]
    status: String,
}

async fn fetch_returns(error: RwSignal<Option<String>>) -> Vec<ReturnSlip> {
    match api::get_json("/api/returns").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load returns.".to_owned()));
            Vec::new()
        }
    }
}

#[component]
pub fn ReturnsPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let returns = LocalResource::new(move || fetch_returns(error));

    let export = move |_| {
        if let Some(list) = returns.get() {
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|r| {
                    vec![
                        r.id.to_string(),
                        r.order_id.to_string(),
                        r.created_date.clone(),
                        r.reason.clone(),
                        r.status.clone(),
                    ]
                })
                .collect();
            csv::download(
                "returns.csv",
                &csv::build(&["id", "order", "date", "reason", "status"], &rows),
            );
        }
    };

    view! {
        <div class="page page--returns">
            <PageHeader title="Returns">
                <button class="btn" on:click=export>
                    "Export CSV"
                </button>
            </PageHeader>
            <Notice message=error/>
            <Suspense fallback=move || view! { <p>"Loading returns..."</p> }>
                {move || {
                    returns
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Return"</th>
                                            <th>"Order"</th>
                                            <th>"Date"</th>
                                            <th>"Reason"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|r| {
                                                view! {
                                                    <tr>
                                                        <td>{format!("#{}", r.id)}</td>
                                                        <td>{format!("#{}", r.order_id)}</td>
                                                        <td>{r.created_date}</td>
                                                        <td>{r.reason}</td>
                                                        <td>{r.status}</td>
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
