//! Core traits for Catalog Admin
//!
//! This module defines the behavior shared by the category and product form
//! drafts so the UI can drive both through the same code path.

use crate::error::AdminResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Form drafts implement this to enforce their "required" fields before any
/// request is sent.
///
/// # Example
///
/// ```rust,ignore
/// use catalog_core::{AdminError, AdminResult, Validatable};
///
/// struct Draft {
///     name: String,
/// }
///
/// impl Validatable for Draft {
///     fn validate(&self) -> AdminResult<()> {
///         if self.name.trim().is_empty() {
///             return Err(AdminError::missing("draft", "name"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or an `AdminError` describing the first
    /// problem found.
    fn validate(&self) -> AdminResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// ============================================================================
// FormDraft Trait
// ============================================================================

/// An editable form that produces a request body for the catalog service
///
/// `Input` is the record without its identifier. The two constructors set
/// the timestamps the service expects for each operation.
pub trait FormDraft: Validatable + Clone + PartialEq + Default + std::fmt::Debug {
    /// Record type returned by the service
    type Record;
    /// Body sent on create and update
    type Input;

    /// Pre-populate a form from an existing record
    fn from_record(record: &Self::Record) -> Self;

    /// Body for a create request: fresh `createdDate`, no `updatedDate`
    fn to_create_input(&self) -> AdminResult<Self::Input>;

    /// Body for an update request: original `createdDate`, fresh `updatedDate`
    fn to_update_input(&self) -> AdminResult<Self::Input>;
}
