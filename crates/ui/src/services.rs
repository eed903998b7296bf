//! Injected Capabilities
//!
//! Everything a view needs from outside its own state is reached through
//! this module, so views can run against fakes:
//!
//! - [`ConfirmPrompt`]: the blocking yes/no decision before a delete
//! - [`Services`]: the catalog API and the prompt, shared through Dioxus
//!   context by [`App`](crate::App)

use async_trait::async_trait;
use catalog_client::CatalogApi;
use rfd::{AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel};
use std::rc::Rc;
use std::sync::Arc;

// ============================================================================
// Confirmation
// ============================================================================

/// A yes/no question put to the operator
#[async_trait(?Send)]
pub trait ConfirmPrompt {
    /// Resolve to `true` only if the operator accepted
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Native message box with Yes/No buttons
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeConfirm;

#[async_trait(?Send)]
impl ConfirmPrompt for NativeConfirm {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        let result = AsyncMessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::YesNo)
            .show()
            .await;

        matches!(result, MessageDialogResult::Yes)
    }
}

// ============================================================================
// Services
// ============================================================================

/// Capabilities shared with every page
#[derive(Clone)]
pub struct Services {
    pub api: Arc<dyn CatalogApi>,
    pub prompt: Rc<dyn ConfirmPrompt>,
}

impl Services {
    pub fn new(api: Arc<dyn CatalogApi>, prompt: Rc<dyn ConfirmPrompt>) -> Self {
        Self { api, prompt }
    }

    /// Services backed by `api` and the native confirmation dialog
    pub fn native(api: Arc<dyn CatalogApi>) -> Self {
        Self::new(api, Rc::new(NativeConfirm))
    }
}

impl std::fmt::Debug for Services {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
