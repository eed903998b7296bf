//! Resource client traits
//!
//! One trait per resource, each method mapping to exactly one HTTP request.
//! Views depend on these traits rather than on [`RestClient`](crate::RestClient)
//! so they can be driven by in-memory fakes.

use async_trait::async_trait;
use catalog_core::{Category, CategoryInput, Product, ProductInput, RecordId};

use crate::error::ClientResult;

/// Category endpoints
#[async_trait]
pub trait CategoryApi: Send + Sync {
    /// `GET /Category`
    async fn list_categories(&self) -> ClientResult<Vec<Category>>;

    /// `GET /Category/{id}`
    async fn get_category(&self, id: RecordId) -> ClientResult<Category>;

    /// `POST /Category`; `None` when the reply carries no usable record
    async fn create_category(&self, input: &CategoryInput) -> ClientResult<Option<Category>>;

    /// `PUT /Category/{id}`; `None` when the reply carries no usable record
    async fn update_category(
        &self,
        id: RecordId,
        input: &CategoryInput,
    ) -> ClientResult<Option<Category>>;

    /// `DELETE /Category/{id}`
    async fn delete_category(&self, id: RecordId) -> ClientResult<()>;
}

/// Product endpoints
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// `GET /Product?pageNumber=1&pageSize=1000`
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    /// `GET /Category/{id}/products?pageNumber=1&pageSize=1000`
    async fn list_products_by_category(&self, category_id: RecordId)
    -> ClientResult<Vec<Product>>;

    /// `GET /Product/{id}`
    async fn get_product(&self, id: RecordId) -> ClientResult<Product>;

    /// `POST /Product`; `None` when the reply carries no usable record
    async fn create_product(&self, input: &ProductInput) -> ClientResult<Option<Product>>;

    /// `PUT /Product/{id}`; `None` when the reply carries no usable record
    async fn update_product(
        &self,
        id: RecordId,
        input: &ProductInput,
    ) -> ClientResult<Option<Product>>;

    /// `DELETE /Product/{id}`
    async fn delete_product(&self, id: RecordId) -> ClientResult<()>;
}

/// Both resources behind one object, as shared through the UI context
pub trait CatalogApi: CategoryApi + ProductApi {}

impl<T: CategoryApi + ProductApi> CatalogApi for T {}
