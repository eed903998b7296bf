//! # Product List Page
//!
//! Table of products, optionally restricted to one category through the
//! `categoryId` query parameter. The full category list is fetched once to
//! resolve the Category column and to fill the selector in the modal.

use catalog_core::{Category, Product, ProductForm};
use dioxus::prelude::*;

use crate::components::{
    Checkbox, ErrorBanner, FormModal, LoadingLine, PageHeader, Select, SelectOption, TextArea,
    TextInput, modal_title, submit_label,
};
use crate::controller;
use crate::router::{ProductQuery, Route};
use crate::rows::product_rows;
use crate::services::Services;
use crate::state::{ListView, Phase, Resource};

/// Columns in the product table, used by the empty-state row
const COLUMN_COUNT: usize = 8;

/// Product list view
#[component]
pub fn ProductList(query: ProductQuery) -> Element {
    let services = use_context::<Services>();
    let mut view = use_signal(ListView::<Product>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let filter = query.category_id;

    // Category lookup, once per screen
    {
        let api = services.api.clone();
        use_hook(move || {
            spawn(async move {
                let lookup = controller::load_category_lookup(api.as_ref()).await;
                categories.set(lookup);
            })
        });
    }

    // List fetch on mount and whenever the filter in the route changes
    {
        let api = services.api.clone();
        use_effect(use_reactive!(|(query,)| {
            let api = api.clone();
            spawn(async move {
                controller::refresh::<Product, _>(api.as_ref(), &view, query.category_id).await;
            });
        }));
    }

    let snapshot = view();
    let lookup = categories();
    let rows = product_rows(snapshot.items(), &lookup);
    let editing = snapshot.modal().edit_target().is_some();
    let form = snapshot.modal().form().cloned();
    let show_empty = snapshot.phase() == Phase::Ready && rows.is_empty();

    let category_options: Vec<SelectOption> = lookup
        .iter()
        .map(|c| SelectOption::new(c.id.to_string(), c.category_name.clone()))
        .collect();

    let on_submit = {
        let api = services.api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn(async move {
                controller::submit::<Product, _>(api.as_ref(), &view, filter).await;
            });
        }
    };

    let title = if filter.is_some() {
        "Products by Category"
    } else {
        "Products"
    };

    rsx! {
        div {
            class: "container",

            PageHeader {
                title: title.to_string(),
                add_label: "Add Product",
                on_add: move |_| view.write().open_create(ProductForm::with_category(filter)),
                links: vec![("Go to Category List".to_string(), Route::CategoryList {})],
            }

            ErrorBanner {
                error: snapshot.error().cloned(),
                on_dismiss: move |_| view.write().dismiss_error(),
            }

            if snapshot.is_loading() {
                LoadingLine { plural: Product::PLURAL }
            }

            table {
                class: "table",
                thead {
                    tr {
                        th { "No" }
                        th { "Name" }
                        th { "Description" }
                        th { "Price" }
                        th { "Stock" }
                        th { "SKU" }
                        th { "Category" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.id}",
                            class: if !row.active { "row-inactive" },
                            td { "{row.number}" }
                            td { "{row.name}" }
                            td { "{row.description}" }
                            td { "{row.price}" }
                            td { "{row.stock}" }
                            td { "{row.sku}" }
                            td { "{row.category}" }
                            td {
                                class: "row-actions",
                                button {
                                    class: "btn btn-sm btn-warning",
                                    onclick: {
                                        let api = services.api.clone();
                                        let id = row.id;
                                        move |_| {
                                            let api = api.clone();
                                            spawn(async move {
                                                controller::open_edit::<Product, _>(api.as_ref(), &view, id).await;
                                            });
                                        }
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-sm btn-danger",
                                    onclick: {
                                        let services = services.clone();
                                        let id = row.id;
                                        move |_| {
                                            let api = services.api.clone();
                                            let prompt = services.prompt.clone();
                                            spawn(async move {
                                                controller::delete::<Product, _, _>(
                                                    api.as_ref(),
                                                    prompt.as_ref(),
                                                    &view,
                                                    id,
                                                    filter,
                                                )
                                                .await;
                                            });
                                        }
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                    if show_empty {
                        tr {
                            td {
                                colspan: "{COLUMN_COUNT}",
                                class: "text-center",
                                "No Products Found"
                            }
                        }
                    }
                }
            }

            if let Some(form) = form {
                FormModal {
                    title: modal_title(editing, "Product"),
                    submit_label: submit_label(editing).to_string(),
                    saving: snapshot.is_saving(),
                    on_submit: on_submit,
                    on_cancel: move |_| view.write().close_modal(),

                    TextInput {
                        label: "Name",
                        name: "productName",
                        value: form.name.clone(),
                        required: true,
                        on_change: move |value: String| view.write().update_form(|f| f.name = value),
                    }
                    TextArea {
                        label: "Description",
                        name: "productDescription",
                        value: form.description.clone(),
                        required: true,
                        on_change: move |value: String| {
                            view.write().update_form(|f| f.description = value)
                        },
                    }
                    TextInput {
                        label: "Price",
                        name: "price",
                        input_type: "number",
                        min: "0",
                        step: "0.01",
                        value: form.price.clone(),
                        required: true,
                        on_change: move |value: String| view.write().update_form(|f| f.price = value),
                    }
                    TextInput {
                        label: "Stock Quantity",
                        name: "stockQuantity",
                        input_type: "number",
                        min: "0",
                        step: "1",
                        value: form.stock_quantity.clone(),
                        required: true,
                        on_change: move |value: String| {
                            view.write().update_form(|f| f.stock_quantity = value)
                        },
                    }
                    TextInput {
                        label: "SKU",
                        name: "sku",
                        value: form.sku.clone(),
                        required: true,
                        on_change: move |value: String| view.write().update_form(|f| f.sku = value),
                    }
                    TextInput {
                        label: "Image URL",
                        name: "imageUrl",
                        value: form.image_url.clone(),
                        on_change: move |value: String| {
                            view.write().update_form(|f| f.image_url = value)
                        },
                    }
                    Select {
                        label: "Category",
                        placeholder: "Select a category",
                        value: form.category_id.map(|id| id.to_string()).unwrap_or_default(),
                        options: category_options,
                        required: true,
                        on_change: move |value: String| {
                            view.write().update_form(|f| f.category_id = value.parse().ok())
                        },
                    }
                    Checkbox {
                        label: "Active",
                        checked: form.is_active,
                        on_change: move |checked: bool| {
                            view.write().update_form(|f| f.is_active = checked)
                        },
                    }
                }
            }
        }
    }
}
