//! List View Controllers
//!
//! Async flows that move a [`ListView`] through its transitions. This is
//! the only place the UI talks to the catalog service. Each flow takes:
//!
//! - the API as `&dyn CatalogApi`
//! - a [`ViewStore`] holding the view (a `Signal` in the app, a `RefCell`
//!   in tests)
//! - for deletes, a [`ConfirmPrompt`]
//!
//! Failures are logged with their cause and then collapsed to the static
//! per-operation banner.

use catalog_client::{CatalogApi, ClientError, ClientResult};
use catalog_core::{
    AdminError, Category, CategoryInput, FormDraft, Product, ProductInput, RecordId,
};
use dioxus::prelude::*;
use std::cell::RefCell;

use crate::services::ConfirmPrompt;
use crate::state::{FailureKind, ListView, Resource, Submission};

// ============================================================================
// Stores
// ============================================================================

/// Somewhere a list view lives between awaits
pub trait ViewStore<R: Resource> {
    fn update<T>(&self, f: impl FnOnce(&mut ListView<R>) -> T) -> T;
}

impl<R: Resource> ViewStore<R> for Signal<ListView<R>> {
    fn update<T>(&self, f: impl FnOnce(&mut ListView<R>) -> T) -> T {
        let mut signal = *self;
        let mut view = signal.write();
        f(&mut *view)
    }
}

impl<R: Resource> ViewStore<R> for RefCell<ListView<R>> {
    fn update<T>(&self, f: impl FnOnce(&mut ListView<R>) -> T) -> T {
        f(&mut self.borrow_mut())
    }
}

// ============================================================================
// Remote bindings
// ============================================================================

/// Maps a resource onto its endpoints
#[allow(async_fn_in_trait)]
pub trait RemoteResource: Resource {
    async fn fetch_list(
        api: &dyn CatalogApi,
        category_filter: Option<RecordId>,
    ) -> ClientResult<Vec<Self>>;

    async fn fetch_one(api: &dyn CatalogApi, id: RecordId) -> ClientResult<Self>;

    async fn create(
        api: &dyn CatalogApi,
        input: &<Self::Form as FormDraft>::Input,
    ) -> ClientResult<()>;

    async fn update(
        api: &dyn CatalogApi,
        id: RecordId,
        input: &<Self::Form as FormDraft>::Input,
    ) -> ClientResult<()>;

    async fn delete(api: &dyn CatalogApi, id: RecordId) -> ClientResult<()>;
}

impl RemoteResource for Category {
    /// Categories are never filtered
    async fn fetch_list(api: &dyn CatalogApi, _: Option<RecordId>) -> ClientResult<Vec<Self>> {
        api.list_categories().await
    }

    async fn fetch_one(api: &dyn CatalogApi, id: RecordId) -> ClientResult<Self> {
        api.get_category(id).await
    }

    async fn create(api: &dyn CatalogApi, input: &CategoryInput) -> ClientResult<()> {
        match api.create_category(input).await? {
            Some(created) => tracing::info!(id = created.id, "category created"),
            None => tracing::info!("category created"),
        }
        Ok(())
    }

    async fn update(api: &dyn CatalogApi, id: RecordId, input: &CategoryInput) -> ClientResult<()> {
        api.update_category(id, input).await?;
        tracing::info!(id, "category updated");
        Ok(())
    }

    async fn delete(api: &dyn CatalogApi, id: RecordId) -> ClientResult<()> {
        api.delete_category(id).await?;
        tracing::info!(id, "category deleted");
        Ok(())
    }
}

impl RemoteResource for Product {
    async fn fetch_list(
        api: &dyn CatalogApi,
        category_filter: Option<RecordId>,
    ) -> ClientResult<Vec<Self>> {
        match category_filter {
            Some(category_id) => api.list_products_by_category(category_id).await,
            None => api.list_products().await,
        }
    }

    async fn fetch_one(api: &dyn CatalogApi, id: RecordId) -> ClientResult<Self> {
        api.get_product(id).await
    }

    async fn create(api: &dyn CatalogApi, input: &ProductInput) -> ClientResult<()> {
        match api.create_product(input).await? {
            Some(created) => tracing::info!(id = created.id, "product created"),
            None => tracing::info!("product created"),
        }
        Ok(())
    }

    async fn update(api: &dyn CatalogApi, id: RecordId, input: &ProductInput) -> ClientResult<()> {
        api.update_product(id, input).await?;
        tracing::info!(id, "product updated");
        Ok(())
    }

    async fn delete(api: &dyn CatalogApi, id: RecordId) -> ClientResult<()> {
        api.delete_product(id).await?;
        tracing::info!(id, "product deleted");
        Ok(())
    }
}

/// Why a save did not reach the service or was refused by it
#[derive(Debug, thiserror::Error)]
enum SaveError {
    #[error(transparent)]
    Form(#[from] AdminError),
    #[error(transparent)]
    Client(#[from] ClientError),
}

// ============================================================================
// Flows
// ============================================================================

/// Fetch the list and apply it if no newer fetch was issued meanwhile
///
/// With a category filter the by-category endpoint is used. Returns whether
/// the result was applied.
pub async fn refresh<R, S>(api: &dyn CatalogApi, store: &S, category_filter: Option<RecordId>) -> bool
where
    R: RemoteResource,
    S: ViewStore<R> + ?Sized,
{
    let ticket = store.update(|view| view.begin_fetch());

    let result = R::fetch_list(api, category_filter).await.map_err(|e| {
        tracing::warn!(resource = R::PLURAL, error = %e, "list fetch failed");
        if category_filter.is_some() {
            FailureKind::FetchFiltered
        } else {
            FailureKind::FetchList
        }
    });

    let applied = store.update(|view| view.finish_fetch(ticket, result));
    if !applied {
        tracing::debug!(resource = R::PLURAL, "discarded stale list response");
    }
    applied
}

/// Load a record by id and open the edit modal on it
pub async fn open_edit<R, S>(api: &dyn CatalogApi, store: &S, id: RecordId) -> bool
where
    R: RemoteResource,
    S: ViewStore<R> + ?Sized,
{
    match R::fetch_one(api, id).await {
        Ok(record) => {
            store.update(|view| view.open_edit(id, &record));
            true
        }
        Err(e) => {
            tracing::warn!(resource = R::SINGULAR, id, error = %e, "fetch for edit failed");
            store.update(|view| view.fail(FailureKind::FetchForEdit));
            false
        }
    }
}

/// Submit the modal form
///
/// Creates when there is no edit target, otherwise updates the captured
/// identifier. On success the modal closes and the list is re-fetched; on
/// failure the banner shows the save message and the modal stays open.
pub async fn submit<R, S>(api: &dyn CatalogApi, store: &S, category_filter: Option<RecordId>) -> bool
where
    R: RemoteResource,
    S: ViewStore<R> + ?Sized,
{
    let Some(submission) = store.update(|view| view.begin_submit()) else {
        return false;
    };

    let result: Result<(), SaveError> = match &submission {
        Submission::Create(form) => match form.to_create_input() {
            Ok(input) => R::create(api, &input).await.map_err(SaveError::from),
            Err(e) => Err(e.into()),
        },
        Submission::Update { id, form } => match form.to_update_input() {
            Ok(input) => R::update(api, *id, &input).await.map_err(SaveError::from),
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => {
            store.update(|view| view.finish_submit(true));
            refresh::<R, S>(api, store, category_filter).await;
            true
        }
        Err(SaveError::Form(e)) if e.is_form() => {
            tracing::debug!(resource = R::SINGULAR, error = %e, "form incomplete, nothing sent");
            store.update(|view| view.finish_submit(false));
            false
        }
        Err(e) => {
            tracing::warn!(resource = R::SINGULAR, error = %e, "save failed");
            store.update(|view| view.finish_submit(false));
            false
        }
    }
}

/// Ask for confirmation, then delete and re-fetch
///
/// Declining sends nothing and leaves the view untouched.
pub async fn delete<R, S, P>(
    api: &dyn CatalogApi,
    prompt: &P,
    store: &S,
    id: RecordId,
    category_filter: Option<RecordId>,
) -> bool
where
    R: RemoteResource,
    S: ViewStore<R> + ?Sized,
    P: ConfirmPrompt + ?Sized,
{
    let title = format!("Delete {}", R::SINGULAR);
    let message = format!("Are you sure you want to delete this {}?", R::SINGULAR);
    if !prompt.confirm(&title, &message).await {
        tracing::debug!(resource = R::SINGULAR, id, "delete declined");
        return false;
    }

    match R::delete(api, id).await {
        Ok(()) => {
            refresh::<R, S>(api, store, category_filter).await;
            true
        }
        Err(e) => {
            tracing::warn!(resource = R::SINGULAR, id, error = %e, "delete failed");
            store.update(|view| view.fail(FailureKind::Delete));
            false
        }
    }
}

/// Full category list used to resolve product category names
///
/// Fetched once per product screen. A failure yields an empty lookup, so
/// every row shows the placeholder.
pub async fn load_category_lookup(api: &dyn CatalogApi) -> Vec<Category> {
    match api.list_categories().await {
        Ok(categories) => categories,
        Err(e) => {
            tracing::warn!(error = %e, "category lookup unavailable");
            Vec::new()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
