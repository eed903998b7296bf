//! # Category List Page
//!
//! Table of categories with the add/edit modal and per-row actions:
//! - **Edit**: loads the category by id and opens the modal on it
//! - **Delete**: asks for confirmation, then deletes and re-fetches
//! - **View Products**: navigates to the product list filtered by the row

use catalog_core::{Category, CategoryForm};
use dioxus::prelude::*;

use crate::components::{
    Checkbox, ErrorBanner, FormModal, LoadingLine, PageHeader, TextArea, TextInput, modal_title,
    submit_label,
};
use crate::controller;
use crate::router::Route;
use crate::rows::category_rows;
use crate::services::Services;
use crate::state::{ListView, Resource};

/// Category list view
#[component]
pub fn CategoryList() -> Element {
    let services = use_context::<Services>();
    let mut view = use_signal(ListView::<Category>::new);
    let nav = navigator();

    // Initial fetch; the task is dropped with the component
    {
        let api = services.api.clone();
        use_hook(move || {
            spawn(async move {
                controller::refresh::<Category, _>(api.as_ref(), &view, None).await;
            })
        });
    }

    let snapshot = view();
    let rows = category_rows(snapshot.items());
    let editing = snapshot.modal().edit_target().is_some();
    let form = snapshot.modal().form().cloned();

    let on_submit = {
        let api = services.api.clone();
        move |_: ()| {
            let api = api.clone();
            spawn(async move {
                controller::submit::<Category, _>(api.as_ref(), &view, None).await;
            });
        }
    };

    rsx! {
        div {
            class: "container",

            PageHeader {
                title: "Categories",
                add_label: "Add Category",
                on_add: move |_| view.write().open_create(CategoryForm::default()),
                links: vec![("Go to Product List".to_string(), Route::all_products())],
            }

            ErrorBanner {
                error: snapshot.error().cloned(),
                on_dismiss: move |_| view.write().dismiss_error(),
            }

            if snapshot.is_loading() {
                LoadingLine { plural: Category::PLURAL }
            }

            table {
                class: "table",
                thead {
                    tr {
                        th { "No" }
                        th { "Name" }
                        th { "Description" }
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
                                                controller::open_edit::<Category, _>(api.as_ref(), &view, id).await;
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
                                                controller::delete::<Category, _, _>(
                                                    api.as_ref(),
                                                    prompt.as_ref(),
                                                    &view,
                                                    id,
                                                    None,
                                                )
                                                .await;
                                            });
                                        }
                                    },
                                    "Delete"
                                }
                                button {
                                    class: "btn btn-sm btn-secondary",
                                    onclick: {
                                        let id = row.id;
                                        move |_| {
                                            nav.push(Route::products_for(id));
                                        }
                                    },
                                    "View Products"
                                }
                            }
                        }
                    }
                }
            }

            if let Some(form) = form {
                FormModal {
                    title: modal_title(editing, "Category"),
                    submit_label: submit_label(editing).to_string(),
                    saving: snapshot.is_saving(),
                    on_submit: on_submit,
                    on_cancel: move |_| view.write().close_modal(),

                    TextInput {
                        label: "Name",
                        name: "categoryName",
                        value: form.name.clone(),
                        required: true,
                        on_change: move |value: String| view.write().update_form(|f| f.name = value),
                    }
                    TextArea {
                        label: "Description",
                        name: "categoryDescription",
                        value: form.description.clone(),
                        required: true,
                        on_change: move |value: String| {
                            view.write().update_form(|f| f.description = value)
                        },
                    }
                    TextInput {
                        label: "Image URL",
                        name: "imageUrl",
                        value: form.image_url.clone(),
                        on_change: move |value: String| {
                            view.write().update_form(|f| f.image_url = value)
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
