//! Product category list with a create dialog.

use leptos::prelude::*;

use crate::components::notice::Notice;
use crate::components::page_header::PageHeader;
use crate::net::api;
use crate::util::csv;

/// Category record as returned by `GET /api/categories`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
struct Category {
    id: i64,
    name: String,
    #[serde(default)]
    description: String,
}

async fn fetch_categories(error: RwSignal<Option<String>>) -> Vec<Category> {
    match api::get_json("/api/categories").await {
        Ok(list) => list,
        Err(_) => {
            error.set(Some("Could not load categories.".to_owned()));
            Vec::new()
        }
    }
}

/// Category list with create and CSV export actions.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let categories = LocalResource::new(move || fetch_categories(error));

    let show_create = RwSignal::new(false);

    let export = move |_| {
        if let Some(list) = categories.get() {
            let rows: Vec<Vec<String>> = list
                .iter()
                .map(|c| vec![c.id.to_string(), c.name.clone(), c.description.clone()])
                .collect();
            csv::download(
                "categories.csv",
                &csv::build(&["id", "name", "description"], &rows),
            );
        }
    };

    view! {
        <div class="page page--categories">
            <PageHeader title="Categories">
                <button class="btn" on:click=export>
                    "Export CSV"
                </button>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Category"
                </button>
            </PageHeader>
            <Notice message=error/>
            <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                {move || {
                    categories
                        .get()
                        .map(|list| {
                            view! {
                                <table class="data-table">
                                    <thead>
                                        <tr>
                                            <th>"Name"</th>
                                            <th>"Description"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .into_iter()
                                            .map(|c| {
                                                view! {
                                                    <tr>
                                                        <td>{c.name}</td>
                                                        <td>{c.description}</td>
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
                <CreateCategoryDialog
                    on_close=Callback::new(move |()| show_create.set(false))
                    categories=categories
                    error=error
                />
            </Show>
        </div>
    }
}

/// Modal dialog posting a new category to the backend.
#[component]
fn CreateCategoryDialog(
    on_close: Callback<()>,
    categories: LocalResource<Vec<Category>>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let new_name = name.get_untracked().trim().to_owned();
        if new_name.is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            #[derive(serde::Serialize)]
            struct NewCategory {
                name: String,
                description: String,
            }

            let body = NewCategory {
                name: new_name,
                description: description.get_untracked().trim().to_owned(),
            };
            leptos::task::spawn_local(async move {
                match api::post_json::<_, Category>("/api/categories", &body).await {
                    Ok(_) => {
                        categories.refetch();
                        on_close.run(());
                    }
                    Err(_) => error.set(Some("Could not create the category.".to_owned())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (new_name, &categories, &error);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Category"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
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
