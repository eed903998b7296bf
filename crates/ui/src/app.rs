//! Main Application Component for Catalog Admin
//!
//! The root component wires the injected capabilities into context and hands
//! the window over to the router.

use catalog_client::CatalogApi;
use dioxus::prelude::*;
use std::sync::Arc;

use crate::router::Route;
use crate::services::Services;

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
///
/// Expects an `Arc<dyn CatalogApi>` in the root context, supplied by
/// [`launch`](crate::launch).
#[component]
pub fn App() -> Element {
    let api = use_context::<Arc<dyn CatalogApi>>();
    use_context_provider(move || Services::native(api));

    use_effect(|| {
        tracing::info!("Catalog Admin UI initialized");
    });

    rsx! {
        div {
            class: "app-container",
            Router::<Route> {}
        }
    }
}
