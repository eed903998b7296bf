use dioxus::prelude::*;

use crate::router::Route;

/// Fallback for paths outside the route table
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!("no route for {}", path);

    rsx! {
        div {
            class: "home",
            h2 { "Page not found" }
            p { class: "text-muted", "Nothing lives at {path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Go to Home" }
        }
    }
}
