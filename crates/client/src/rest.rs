//! # REST Client
//!
//! `reqwest`-backed implementation of [`CategoryApi`] and [`ProductApi`].
//!
//! Every call is a single request against `{base_url}/{path}`:
//!
//! ```text
//! GET    /Category
//! GET    /Category/{id}
//! GET    /Category/{id}/products?pageNumber=1&pageSize=1000
//! POST   /Category
//! PUT    /Category/{id}
//! DELETE /Category/{id}
//! GET    /Product?pageNumber=1&pageSize=1000
//! GET    /Product/{id}
//! POST   /Product
//! PUT    /Product/{id}
//! DELETE /Product/{id}
//! ```
//!
//! There are no retries and no timeout override; a failed request is
//! returned to the caller as-is.

use async_trait::async_trait;
use catalog_core::{
    AdminConfig, Category, CategoryInput, Product, ProductInput, ProductPage, RecordId,
};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::{CategoryApi, ProductApi};
use crate::error::{ClientError, ClientResult};

/// Page requested on every product listing
pub const PAGE_NUMBER: u32 = 1;

/// Page size requested on every product listing, large enough to return
/// the whole catalog in one page
pub const PAGE_SIZE: u32 = 1000;

const CATEGORY: &str = "Category";
const PRODUCT: &str = "Product";

// ============================================================================
// Client
// ============================================================================

/// HTTP client for the catalog service
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a client for the given base URL (e.g. `http://localhost:5000/api`)
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ClientError::InvalidBaseUrl(base_url));
        }

        Ok(Self {
            client: Client::builder().build()?,
            base_url: trimmed.to_string(),
        })
    }

    /// Create a client from the resolved application config
    pub fn from_config(config: &AdminConfig) -> ClientResult<Self> {
        Self::new(config.api_base_url.clone())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> (RequestBuilder, String) {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "catalog request");
        (self.client.request(method, &url), url)
    }

    // ========================================================================
    // Generic request helpers
    // ========================================================================

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let (req, url) = self.request(Method::GET, path);
        let response = Self::check("GET", &url, req.send().await?).await?;
        Self::decode(&url, response).await
    }

    async fn get_page(&self, path: &str) -> ClientResult<Vec<Product>> {
        let (req, url) = self.request(Method::GET, path);
        let req = req.query(&[("pageNumber", PAGE_NUMBER), ("pageSize", PAGE_SIZE)]);
        let response = Self::check("GET", &url, req.send().await?).await?;
        let page: ProductPage = Self::decode(&url, response).await?;
        Ok(page.items)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        let (req, url) = self.request(Method::POST, path);
        let response = Self::check("POST", &url, req.json(body).send().await?).await?;
        Self::accepted(&url, response).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Option<T>> {
        let (req, url) = self.request(Method::PUT, path);
        let response = Self::check("PUT", &url, req.json(body).send().await?).await?;
        Self::accepted(&url, response).await
    }

    async fn delete(&self, path: &str) -> ClientResult<()> {
        let (req, url) = self.request(Method::DELETE, path);
        Self::check("DELETE", &url, req.send().await?).await?;
        Ok(())
    }

    /// Turn a non-2xx response into a `Status` error
    async fn check(method: &'static str, url: &str, response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(method, url, status = status.as_u16(), "catalog request failed");
        Err(ClientError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(url: &str, response: Response) -> ClientResult<T> {
        let text = response.text().await?;
        Self::parse(url, &text)
    }

    /// Body of a successful write
    ///
    /// The status already says the write was applied, so an empty or
    /// unexpected body yields `None` instead of an error.
    async fn accepted<T: DeserializeOwned>(url: &str, response: Response) -> ClientResult<Option<T>> {
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        Ok(Self::parse(url, &text).ok())
    }

    fn parse<T: DeserializeOwned>(url: &str, text: &str) -> ClientResult<T> {
        serde_json::from_str(text).map_err(|e| {
            tracing::warn!(url, error = %e, "unexpected catalog response body");
            ClientError::Decode {
                url: url.to_string(),
                message: e.to_string(),
            }
        })
    }
}

// ============================================================================
// Category endpoints
// ============================================================================

#[async_trait]
impl CategoryApi for RestClient {
    async fn list_categories(&self) -> ClientResult<Vec<Category>> {
        self.get(CATEGORY).await
    }

    async fn get_category(&self, id: RecordId) -> ClientResult<Category> {
        self.get(&format!("{CATEGORY}/{id}")).await
    }

    async fn create_category(&self, input: &CategoryInput) -> ClientResult<Option<Category>> {
        self.post(CATEGORY, input).await
    }

    async fn update_category(
        &self,
        id: RecordId,
        input: &CategoryInput,
    ) -> ClientResult<Option<Category>> {
        self.put(&format!("{CATEGORY}/{id}"), input).await
    }

    async fn delete_category(&self, id: RecordId) -> ClientResult<()> {
        self.delete(&format!("{CATEGORY}/{id}")).await
    }
}

// ============================================================================
// Product endpoints
// ============================================================================

#[async_trait]
impl ProductApi for RestClient {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        self.get_page(PRODUCT).await
    }

    async fn list_products_by_category(
        &self,
        category_id: RecordId,
    ) -> ClientResult<Vec<Product>> {
        self.get_page(&format!("{CATEGORY}/{category_id}/products"))
            .await
    }

    async fn get_product(&self, id: RecordId) -> ClientResult<Product> {
        self.get(&format!("{PRODUCT}/{id}")).await
    }

    async fn create_product(&self, input: &ProductInput) -> ClientResult<Option<Product>> {
        self.post(PRODUCT, input).await
    }

    async fn update_product(
        &self,
        id: RecordId,
        input: &ProductInput,
    ) -> ClientResult<Option<Product>> {
        self.put(&format!("{PRODUCT}/{id}"), input).await
    }

    async fn delete_product(&self, id: RecordId) -> ClientResult<()> {
        self.delete(&format!("{PRODUCT}/{id}")).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{CategoryForm, FormDraft, ProductForm};
    use mockito::{Matcher, Server};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn paging() -> Matcher {
        Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageNumber".into(), "1".into()),
            Matcher::UrlEncoded("pageSize".into(), "1000".into()),
        ])
    }

    fn product_json(id: i64, category_id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "productName": format!("Product {id}"),
            "productDescription": "desc",
            "price": 9.99,
            "stockQuantity": 3,
            "sku": format!("SKU-{id}"),
            "imageUrl": "",
            "isActive": true,
            "categoryId": category_id,
            "createdDate": "2024-01-01T00:00:00Z",
            "updatedDate": null
        })
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = RestClient::new("localhost:5000").unwrap_err();
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = RestClient::new("http://localhost:5000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("Category"), "http://localhost:5000/api/Category");
    }

    #[tokio::test]
    async fn test_list_categories_keeps_server_order() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/Category")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!([
                    {"id": 2, "categoryName": "Paint", "categoryDescription": "", "imageUrl": "", "isActive": true, "createdDate": "2024-01-01T00:00:00Z"},
                    {"id": 1, "categoryName": "Tools", "categoryDescription": "", "imageUrl": "", "isActive": true, "createdDate": "2024-01-01T00:00:00Z"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        let categories = client.list_categories().await.unwrap();

        mock.assert_async().await;
        let ids: Vec<_> = categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_list_products_sends_fixed_paging() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/Product")
            .match_query(paging())
            .with_status(200)
            .with_body(json!({"items": [product_json(1, 1), product_json(2, 5)]}).to_string())
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        let products = client.list_products().await.unwrap();

        mock.assert_async().await;
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].category_id, 5);
    }

    #[tokio::test]
    async fn test_list_products_by_category_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/Category/3/products")
            .match_query(paging())
            .with_status(200)
            .with_body(json!({"items": [product_json(4, 3)], "totalCount": 1}).to_string())
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        let products = client.list_products_by_category(3).await.unwrap();

        mock.assert_async().await;
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 4);
    }

    #[tokio::test]
    async fn test_create_category_body_has_no_id() {
        let form = CategoryForm {
            name: "Tools".to_string(),
            description: "Hand tools".to_string(),
            ..CategoryForm::default()
        };
        let input = form.to_create_input().unwrap();

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/Category")
            .match_body(Matcher::Json(serde_json::to_value(&input).unwrap()))
            .with_status(201)
            .with_body(
                json!({
                    "id": 11,
                    "categoryName": "Tools",
                    "categoryDescription": "Hand tools",
                    "imageUrl": "",
                    "isActive": true,
                    "createdDate": input.created_date,
                    "updatedDate": null
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        let created = client.create_category(&input).await.unwrap();

        mock.assert_async().await;
        assert_eq!(created.map(|c| c.id), Some(11));
    }

    #[tokio::test]
    async fn test_create_category_accepts_empty_body() {
        let input = CategoryForm {
            name: "Tools".to_string(),
            description: "Hand tools".to_string(),
            ..CategoryForm::default()
        }
        .to_create_input()
        .unwrap();

        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/Category")
            .with_status(201)
            .with_body("")
            .expect(1)
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        let created = client.create_category(&input).await.unwrap();

        mock.assert_async().await;
        assert!(created.is_none());
    }

    #[tokio::test]
    async fn test_create_product_tolerates_unexpected_body() {
        let input = ProductForm {
            name: "Saw".to_string(),
            description: "Hand saw".to_string(),
            price: "19.99".to_string(),
            stock_quantity: "2".to_string(),
            sku: "SW-1".to_string(),
            category_id: Some(1),
            ..ProductForm::default()
        }
        .to_create_input()
        .unwrap();

        let mut server = Server::new_async().await;
        server
            .mock("POST", "/Product")
            .with_status(201)
            .with_body(r#"{"message": "created"}"#)
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        assert!(client.create_product(&input).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_product_accepts_empty_body() {
        let form = ProductForm {
            name: "Saw".to_string(),
            description: "Hand saw".to_string(),
            price: "19.99".to_string(),
            stock_quantity: "2".to_string(),
            sku: "SW-1".to_string(),
            category_id: Some(1),
            ..ProductForm::default()
        };
        let input = form.to_update_input().unwrap();

        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/Product/8")
            .match_body(Matcher::PartialJson(json!({"productName": "Saw", "price": 19.99})))
            .with_status(204)
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        let updated = client.update_product(8, &input).await.unwrap();

        mock.assert_async().await;
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_update_category_returns_record() {
        let input = CategoryForm {
            name: "Tools".to_string(),
            description: "Hand tools".to_string(),
            ..CategoryForm::default()
        }
        .to_update_input()
        .unwrap();

        let mut server = Server::new_async().await;
        server
            .mock("PUT", "/Category/1")
            .with_status(200)
            .with_body(json!({"id": 1, "categoryName": "Tools"}).to_string())
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        let updated = client.update_category(1, &input).await.unwrap();
        assert_eq!(updated.map(|c| c.id), Some(1));
    }

    #[tokio::test]
    async fn test_delete_sends_no_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", "/Product/5")
            .match_body(Matcher::Exact(String::new()))
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        client.delete_product(5).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/Category/42")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        let err = client.get_category(42).await.unwrap_err();
        assert!(matches!(err, ClientError::Status { status: 404, .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/Product/1")
            .with_status(200)
            .with_body(r#"{"id": "one"}"#)
            .create_async()
            .await;

        let client = RestClient::new(server.url()).unwrap();
        let err = client.get_product(1).await.unwrap_err();
        assert!(matches!(err, ClientError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let client = RestClient::new("http://127.0.0.1:9").unwrap();
        let err = client.list_categories().await.unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
