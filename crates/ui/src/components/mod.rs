//! # UI Components
//!
//! Reusable Dioxus components for the Catalog Admin list views.
//!
//! - **Inputs**: form input components (text, textarea, select, checkbox)
//! - **Modal**: the add/edit overlay form
//! - **Layout**: page header, error banner, loading line
//!
//! ## Component Hierarchy
//!
//! ```text
//! CategoryList / ProductList
//! ├── PageHeader
//! ├── ErrorBanner
//! ├── table (rows from crate::rows)
//! └── FormModal
//!     └── Input components
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod inputs;
pub mod layout;
pub mod modal;

// ============================================================================
// Re-exports
// ============================================================================

pub use inputs::{Checkbox, Select, SelectOption, TextArea, TextInput};
pub use layout::{ErrorBanner, LoadingLine, PageHeader};
pub use modal::{FormModal, modal_title, submit_label};
