//! Record types for Catalog Admin
//!
//! The catalog service owns every record; this module only describes the
//! JSON shapes exchanged with it. Keys are camelCase on the wire.
//!
//! Each resource has two shapes:
//! - the full record (`Category`, `Product`) as returned by the service
//! - the input record (`CategoryInput`, `ProductInput`) sent on create and
//!   update, which never carries an identifier

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-assigned record identifier
pub type RecordId = i64;

/// Placeholder rendered when a product's category cannot be resolved
pub const MISSING_CATEGORY: &str = "-";

/// Current UTC time as an ISO-8601 string, the format used for
/// `createdDate` / `updatedDate`
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

// ============================================================================
// Category
// ============================================================================

/// A category as returned by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: RecordId,
    pub category_name: String,
    #[serde(default)]
    pub category_description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub updated_date: Option<String>,
}

/// Body of a category create or update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInput {
    pub category_name: String,
    pub category_description: String,
    pub image_url: String,
    pub is_active: bool,
    pub created_date: String,
    pub updated_date: Option<String>,
}


// ============================================================================
// Product
// ============================================================================

/// A product as returned by the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: RecordId,
    pub product_name: String,
    #[serde(default)]
    pub product_description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub stock_quantity: u32,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub category_id: RecordId,
    #[serde(default)]
    pub created_date: String,
    #[serde(default)]
    pub updated_date: Option<String>,
}

/// Body of a product create or update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub product_name: String,
    pub product_description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock_quantity: u32,
    pub sku: String,
    pub image_url: String,
    pub is_active: bool,
    pub category_id: RecordId,
    pub created_date: String,
    pub updated_date: Option<String>,
}


/// Wrapper the service uses for product listings
///
/// Only `items` is guaranteed; the paging fields are filled when the service
/// reports them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(default)]
    pub items: Vec<Product>,
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub page_size: Option<u32>,
}

fn default_active() -> bool {
    true
}

// ============================================================================
// Lookups
// ============================================================================

/// Resolve a category name by identifier for display
///
/// Returns [`MISSING_CATEGORY`] when no category in `categories` matches
/// (or the matching one has an empty name).
pub fn category_name(categories: &[Category], id: RecordId) -> &str {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.category_name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(MISSING_CATEGORY)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{CategoryForm, ProductForm};
    use crate::traits::FormDraft;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn tools() -> Category {
        Category {
            id: 1,
            category_name: "Tools".to_string(),
            category_description: "Hand tools".to_string(),
            image_url: String::new(),
            is_active: true,
            created_date: "2024-01-01T00:00:00Z".to_string(),
            updated_date: None,
        }
    }

    #[test]
    fn test_category_from_service_json() {
        let json = r#"{
            "id": 1,
            "categoryName": "Tools",
            "categoryDescription": "Hand tools",
            "imageUrl": "",
            "isActive": true,
            "createdDate": "2024-01-01T00:00:00Z",
            "updatedDate": null
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category, tools());
    }

    #[test]
    fn test_category_minimal_json() {
        let category: Category =
            serde_json::from_str(r#"{"id": 1, "categoryName": "Tools"}"#).unwrap();
        assert_eq!(category.id, 1);
        assert!(category.is_active);
        assert!(category.updated_date.is_none());
    }

    #[test]
    fn test_category_input_has_no_id() {
        let input = CategoryForm::from_record(&tools()).to_create_input().unwrap();
        let value = serde_json::to_value(input).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert_eq!(obj["categoryName"], "Tools");
        assert_eq!(obj["categoryDescription"], "Hand tools");
        assert!(obj["updatedDate"].is_null());
    }

    #[test]
    fn test_product_price_is_json_number() {
        let json = r#"{
            "id": 7,
            "productName": "Hammer",
            "productDescription": "Claw hammer",
            "price": 12.5,
            "stockQuantity": 40,
            "sku": "HM-001",
            "imageUrl": "",
            "isActive": true,
            "categoryId": 1,
            "createdDate": "2024-01-01T00:00:00Z"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Decimal::from_str("12.5").unwrap());
        assert_eq!(product.stock_quantity, 40);

        let input = ProductForm::from_record(&product).to_update_input().unwrap();
        let value = serde_json::to_value(input).unwrap();
        assert!(value["price"].is_number());
        assert!(value.get("id").is_none());
        assert_eq!(value["categoryId"], 1);
    }

    #[test]
    fn test_product_page_items_only() {
        let page: ProductPage = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, None);
    }

    #[test]
    fn test_category_name_lookup() {
        let categories = vec![tools()];
        assert_eq!(category_name(&categories, 1), "Tools");
        assert_eq!(category_name(&categories, 99), MISSING_CATEGORY);
        assert_eq!(category_name(&[], 1), "-");
    }

    #[test]
    fn test_now_timestamp_is_rfc3339() {
        let ts = now_timestamp();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
        assert!(ts.ends_with('Z'));
    }
}
