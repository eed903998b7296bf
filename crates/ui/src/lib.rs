//! # Catalog UI
//!
//! Dioxus Desktop UI for Catalog Admin.
//!
//! This crate provides the screens an operator uses to manage the
//! categories and products held by the catalog service.
//!
//! ## Features
//!
//! - Category and product tables with add/edit modals
//! - Delete with a native confirmation dialog
//! - Product list filtered by category through the route
//! - Renderer-independent view state and controllers, testable with fakes
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod controller;
pub mod pages;
pub mod router;
pub mod rows;
pub mod services;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use catalog_client;
pub use catalog_core;

// Re-export main components
pub use app::App;
pub use pages::{CategoryList, Home, NotFound, ProductList};
pub use router::{ProductQuery, Route};
pub use services::{ConfirmPrompt, NativeConfirm, Services};
pub use state::{FailureKind, ListView, ModalState, Phase, Resource, ViewError};

use catalog_client::CatalogApi;
use catalog_core::AdminConfig;
use std::sync::Arc;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Catalog Admin";

/// CSS styles for the application
const STYLES: &str = include_str!("../../../assets/styles/main.css");

/// Smallest window the tables stay usable in
const MIN_WIDTH: f64 = 800.0;
const MIN_HEIGHT: f64 = 600.0;

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Catalog Admin desktop application
///
/// The window takes its title and size from `config`; every view talks to
/// the catalog service through `api`.
///
/// # Example
///
/// ```rust,ignore
/// let config = AdminConfig::default();
/// let api = Arc::new(RestClient::from_config(&config)?);
/// catalog_ui::launch(&config, api);
/// ```
pub fn launch(config: &AdminConfig, api: Arc<dyn CatalogApi>) {
    tracing::info!("Starting {} v{}", NAME, VERSION);
    tracing::info!(api = %config.api_base_url, "catalog service");

    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);
    let window = &config.window;

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(window.title.clone())
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            window.width,
                            window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(
                            MIN_WIDTH, MIN_HEIGHT,
                        )),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(api)
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "Catalog Admin");
    }

    #[test]
    fn test_styles_loaded() {
        assert!(!STYLES.is_empty());
        assert!(STYLES.contains(".modal-backdrop"));
        assert!(STYLES.contains(".alert-danger"));
    }
}
