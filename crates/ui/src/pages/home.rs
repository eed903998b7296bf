//! Landing Page
//!
//! Entry screen with buttons leading to the two list views.

use dioxus::prelude::*;

use crate::router::Route;

/// Landing page with navigation buttons
#[component]
pub fn Home() -> Element {
    let nav = navigator();

    rsx! {
        div {
            class: "home",

            h1 { "Catalog Admin" }
            p {
                class: "text-muted",
                "Manage the categories and products of the catalog service."
            }

            div {
                class: "home-actions",

                button {
                    class: "btn btn-primary btn-lg",
                    onclick: move |_| {
                        nav.push(Route::all_products());
                    },
                    "Go to Product List"
                }

                button {
                    class: "btn btn-primary btn-lg",
                    onclick: move |_| {
                        nav.push(Route::CategoryList {});
                    },
                    "Go to Category List"
                }
            }
        }
    }
}
