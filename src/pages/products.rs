//! Product catalog page with a create dialog.

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::{csv, format};

/// Product record as returned by `GET /api/products`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct Product {
    id: i64,
    name: String,
    #[serde(default)]
    category_name: String,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    price: f64,
    #[serde(default)]
    stock: i64,
}

async fn fetch_products(error: RwSignal<Option<String>>) -> Vec<Product> {
    match api::get_json("/api/products").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load products.".to_owned()));
            Vec::new()
        }
    }
}

/// Product list with create and CSV export actions.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let products = LocalResource::new(move || fetch_products(error));

    let show_create = RwSignal::new(false);

    let export = move |_| {
        if let Some(list) = products.get() {
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|p| {
                    vec![
                        p.id.to_string(),
                        p.name.clone(),
                        p.category_name.clone(),
                        p.unit.clone(),
                        format::money(p.price),
                        p.stock.to_string(),
                    ]
                })
                .collect();
            csv::download(
                "products.csv",
                &csv::build(
                    &["id", "name", "category", "unit", "price", "stock"],
                    &rows,
                ),
            );
        }
    };

    view! {
        <div class="page page--products">
            <PageHeader title="Products">
                <button class="btn" on:click=export>
                    "Export CSV"
                </button>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Product"
                </button>
            </PageHeader>
            <Notice message=error/>
            <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                {move || {
                    products
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Category"</th>
                                            <th>"Unit"</th>
                                            <th>"Price"</th>
                                            <th>"Stock"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|p| {
                                                view! {
                                                    <tr>
                                                        <td>{p.name}</td>
                                                        <td>{p.category_name}</td>
                                                        <td>{p.unit}</td>
                                                        <td class="data-table__amount">
                                                            {format::money(p.price)}
                                                        </td>
                                                        <td>{p.stock}</td>
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

            <Show when=move || show_create.get()>
                <CreateProductDialog
                    on_close=Callback::new(move |()| show_create.set(false))
                    products=products
                    error=error
                />
            </Show>
        </div>
    }
}

/// Modal dialog posting a new product to the backend.
#[component]
fn CreateProductDialog(
    on_close: Callback<()>,
    products: LocalResource<Vec<Product>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let unit = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let new_name = name.get_untracked().trim().to_owned();
        if new_name.is_empty() {
            return;
        }
        let Ok(new_price) = price.get_untracked().trim().parse::<f64>() else {
            error.set(Some("Price must be a number.".to_owned()));
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Serialize)]
            struct NewProduct {
                name: String,
                unit: String,
                price: f64,
            }

            let body = NewProduct {
                name: new_name,
                unit: unit.get_untracked().trim().to_owned(),
                price: new_price,
            };
            leptos::task::spawn_local(async move {
                match api::post_json::<_, Product>("/api/products", &body).await {
                    Ok(_) => {
                        products.refetch();
                        on_close.run(());
                    }
                    Err(_) => error.set(Some("Could not create the product.".to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (new_name, new_price, &products);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Product"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Unit"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || unit.get()
                        on:input=move |ev| unit.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Price"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
