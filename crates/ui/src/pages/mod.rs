//! Page Components for Catalog Admin
//!
//! One component per route in [`Route`](crate::router::Route).
//!
//! ## Available Pages
//!
//! - **Home**: landing page with navigation buttons
//! - **CategoryList**: category table with add/edit/delete
//! - **ProductList**: product table, optionally filtered by category
//! - **NotFound**: fallback for unknown paths
//!

pub mod category_list;
pub mod home;
pub mod not_found;
pub mod product_list;

// Re-export page components for convenience
pub use category_list::CategoryList;
pub use home::Home;
pub use not_found::NotFound;
pub use product_list::ProductList;
