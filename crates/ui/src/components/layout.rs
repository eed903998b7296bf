//! Page chrome shared by the list views: the header with its navigation
//! buttons, the inline error banner and the loading line.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::ViewError;

/// Title row with the add button on the left and navigation on the right
///
/// `links` are the cross-links shown before "Go to Home".
#[component]
pub fn PageHeader(
    title: String,
    add_label: String,
    on_add: EventHandler<()>,
    links: Vec<(String, Route)>,
) -> Element {
    rsx! {
        h2 { class: "page-title", "{title}" }
        div {
            class: "page-actions",

            button {
                class: "btn btn-primary",
                onclick: move |_| on_add.call(()),
                "{add_label}"
            }

            div {
                class: "nav-buttons",
                for (label, route) in links {
                    Link {
                        key: "{label}",
                        class: "btn btn-primary",
                        to: route,
                        "{label}"
                    }
                }
                Link { class: "btn btn-primary", to: Route::Home {}, "Go to Home" }
            }
        }
    }
}

/// Inline error message with a dismiss button
#[component]
pub fn ErrorBanner(error: Option<ViewError>, on_dismiss: EventHandler<()>) -> Element {
    let Some(error) = error else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "alert alert-danger",
            role: "alert",
            span { "{error.message}" }
            button {
                r#type: "button",
                class: "alert-close",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}

/// Loading line shown until the first rows arrive
#[component]
pub fn LoadingLine(plural: &'static str) -> Element {
    rsx! {
        div { class: "loading", "Loading {plural}..." }
    }
}
