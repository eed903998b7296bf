//! # Catalog Core
//!
//! Core types, forms, configuration and error handling for Catalog Admin.
//!
//! This crate provides the building blocks shared by the REST client and
//! the UI, including:
//!
//! - **Types**: `Category` / `Product` records and their input bodies
//! - **Forms**: editable drafts backing the add/edit modal
//! - **Config**: layered `AdminConfig` (defaults, TOML, env, flags)
//! - **Errors**: unified error handling with `AdminError` and `AdminResult`
//!

pub mod config;
pub mod error;
pub mod form;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AdminConfig, WindowConfig};
pub use error::{AdminError, AdminResult};
pub use form::{CategoryForm, ProductForm};
pub use traits::{FormDraft, Validatable};
pub use types::{
    Category, CategoryInput, MISSING_CATEGORY, Product, ProductInput, ProductPage, RecordId,
    category_name, now_timestamp,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
