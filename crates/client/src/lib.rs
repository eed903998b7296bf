//! # Catalog Client
//!
//! Thin REST wrappers for the catalog service's `Category` and `Product`
//! resources.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_client::{CategoryApi, RestClient};
//!
//! let client = RestClient::new("http://localhost:5000/api")?;
//! let categories = client.list_categories().await?;
//! ```

pub mod api;
pub mod error;
pub mod rest;

pub use api::{CatalogApi, CategoryApi, ProductApi};
pub use error::{ClientError, ClientResult};
pub use rest::{PAGE_NUMBER, PAGE_SIZE, RestClient};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
