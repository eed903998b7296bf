//! Form drafts for the add/edit modal
//!
//! Drafts hold what the operator typed, as text where the input is text.
//! They become request bodies through [`FormDraft`], which enforces the
//! required fields and parses the numeric ones.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{AdminError, AdminResult};
use crate::traits::{FormDraft, Validatable};
use crate::types::{Category, CategoryInput, Product, ProductInput, RecordId, now_timestamp};

fn require(resource: &'static str, field: &'static str, value: &str) -> AdminResult<()> {
    if value.trim().is_empty() {
        Err(AdminError::missing(resource, field))
    } else {
        Ok(())
    }
}

// ============================================================================
// Category Form
// ============================================================================

/// Editable category fields
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub is_active: bool,
    pub created_date: String,
    pub updated_date: Option<String>,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            image_url: String::new(),
            is_active: true,
            created_date: now_timestamp(),
            updated_date: None,
        }
    }
}

impl Validatable for CategoryForm {
    fn validate(&self) -> AdminResult<()> {
        require("category", "name", &self.name)?;
        require("category", "description", &self.description)
    }
}

impl CategoryForm {
    fn input(&self, created_date: String, updated_date: Option<String>) -> CategoryInput {
        CategoryInput {
            category_name: self.name.trim().to_string(),
            category_description: self.description.clone(),
            image_url: self.image_url.trim().to_string(),
            is_active: self.is_active,
            created_date,
            updated_date,
        }
    }
}

impl FormDraft for CategoryForm {
    type Record = Category;
    type Input = CategoryInput;

    fn from_record(record: &Category) -> Self {
        Self {
            name: record.category_name.clone(),
            description: record.category_description.clone(),
            image_url: record.image_url.clone(),
            is_active: record.is_active,
            created_date: record.created_date.clone(),
            updated_date: record.updated_date.clone(),
        }
    }

    fn to_create_input(&self) -> AdminResult<CategoryInput> {
        self.validate()?;
        Ok(self.input(now_timestamp(), None))
    }

    fn to_update_input(&self) -> AdminResult<CategoryInput> {
        self.validate()?;
        Ok(self.input(self.created_date.clone(), Some(now_timestamp())))
    }
}

// ============================================================================
// Product Form
// ============================================================================

/// Editable product fields
///
/// `price` and `stock_quantity` stay as typed text until submit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock_quantity: String,
    pub sku: String,
    pub image_url: String,
    pub is_active: bool,
    pub category_id: Option<RecordId>,
    pub created_date: String,
    pub updated_date: Option<String>,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: "0".to_string(),
            stock_quantity: "0".to_string(),
            sku: String::new(),
            image_url: String::new(),
            is_active: true,
            category_id: None,
            created_date: now_timestamp(),
            updated_date: None,
        }
    }
}

impl ProductForm {
    /// Empty form with the category selector preset
    pub fn with_category(category_id: Option<RecordId>) -> Self {
        Self {
            category_id,
            ..Self::default()
        }
    }

    /// Parsed price; must be a non-negative decimal
    pub fn parsed_price(&self) -> AdminResult<Decimal> {
        let raw = self.price.trim();
        let price = Decimal::from_str(raw)
            .map_err(|e| AdminError::invalid("price", raw, e.to_string()))?;
        if price.is_sign_negative() && !price.is_zero() {
            return Err(AdminError::invalid("price", raw, "must not be negative"));
        }
        Ok(price)
    }

    /// Parsed stock quantity; must be a non-negative integer
    pub fn parsed_stock(&self) -> AdminResult<u32> {
        let raw = self.stock_quantity.trim();
        raw.parse::<u32>()
            .map_err(|e| AdminError::invalid("stock_quantity", raw, e.to_string()))
    }

    fn input(&self, created_date: String, updated_date: Option<String>) -> AdminResult<ProductInput> {
        let category_id = self
            .category_id
            .ok_or(AdminError::missing("product", "category"))?;

        Ok(ProductInput {
            product_name: self.name.trim().to_string(),
            product_description: self.description.clone(),
            price: self.parsed_price()?,
            stock_quantity: self.parsed_stock()?,
            sku: self.sku.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            is_active: self.is_active,
            category_id,
            created_date,
            updated_date,
        })
    }
}

impl Validatable for ProductForm {
    fn validate(&self) -> AdminResult<()> {
        require("product", "name", &self.name)?;
        require("product", "description", &self.description)?;
        require("product", "price", &self.price)?;
        require("product", "stock_quantity", &self.stock_quantity)?;
        require("product", "sku", &self.sku)?;
        if self.category_id.is_none() {
            return Err(AdminError::missing("product", "category"));
        }
        self.parsed_price()?;
        self.parsed_stock()?;
        Ok(())
    }
}

impl FormDraft for ProductForm {
    type Record = Product;
    type Input = ProductInput;

    fn from_record(record: &Product) -> Self {
        Self {
            name: record.product_name.clone(),
            description: record.product_description.clone(),
            price: record.price.to_string(),
            stock_quantity: record.stock_quantity.to_string(),
            sku: record.sku.clone(),
            image_url: record.image_url.clone(),
            is_active: record.is_active,
            category_id: Some(record.category_id),
            created_date: record.created_date.clone(),
            updated_date: record.updated_date.clone(),
        }
    }

    fn to_create_input(&self) -> AdminResult<ProductInput> {
        self.validate()?;
        self.input(now_timestamp(), None)
    }

    fn to_update_input(&self) -> AdminResult<ProductInput> {
        self.validate()?;
        self.input(self.created_date.clone(), Some(now_timestamp()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_product() -> ProductForm {
        ProductForm {
            name: "Hammer".to_string(),
            description: "Claw hammer".to_string(),
            price: "12.50".to_string(),
            stock_quantity: "40".to_string(),
            sku: "HM-001".to_string(),
            category_id: Some(1),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_category_form_requires_name_and_description() {
        let mut form = CategoryForm::default();
        assert!(!form.is_valid());

        form.name = "Tools".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Field 'description' is required for category");

        form.description = "Hand tools".to_string();
        assert!(form.is_valid());
    }

    #[test]
    fn test_category_create_input_resets_timestamps() {
        let form = CategoryForm {
            name: " Tools ".to_string(),
            description: "Hand tools".to_string(),
            updated_date: Some("stale".to_string()),
            ..CategoryForm::default()
        };
        let input = form.to_create_input().unwrap();
        assert_eq!(input.category_name, "Tools");
        assert!(input.updated_date.is_none());
        assert!(!input.created_date.is_empty());
    }

    #[test]
    fn test_category_update_keeps_created_date() {
        let record = Category {
            id: 3,
            category_name: "Tools".to_string(),
            category_description: "Hand tools".to_string(),
            image_url: String::new(),
            is_active: false,
            created_date: "2024-01-01T00:00:00Z".to_string(),
            updated_date: None,
        };
        let form = CategoryForm::from_record(&record);
        assert!(!form.is_active);

        let input = form.to_update_input().unwrap();
        assert_eq!(input.created_date, "2024-01-01T00:00:00Z");
        assert!(input.updated_date.is_some());
    }

    #[test]
    fn test_product_form_parses_numbers() {
        let input = filled_product().to_create_input().unwrap();
        assert_eq!(input.price, Decimal::from_str("12.50").unwrap());
        assert_eq!(input.stock_quantity, 40);
        assert_eq!(input.category_id, 1);
    }

    #[test]
    fn test_product_form_rejects_bad_numbers() {
        let mut form = filled_product();
        form.price = "-1".to_string();
        assert!(form.validate().unwrap_err().is_form());

        let mut form = filled_product();
        form.stock_quantity = "2.5".to_string();
        assert!(!form.is_valid());

        let mut form = filled_product();
        form.price = "abc".to_string();
        assert!(form.to_create_input().is_err());
    }

    #[test]
    fn test_product_form_requires_category() {
        let mut form = filled_product();
        form.category_id = None;
        let err = form.validate().unwrap_err();
        assert_eq!(err.to_string(), "Field 'category' is required for product");
    }

    #[test]
    fn test_product_form_with_category() {
        let form = ProductForm::with_category(Some(3));
        assert_eq!(form.category_id, Some(3));
        assert!(form.is_active);
        assert_eq!(form.price, "0");
    }

    #[test]
    fn test_product_form_round_trips_record() {
        let record = Product {
            id: 9,
            product_name: "Saw".to_string(),
            product_description: "Hand saw".to_string(),
            price: Decimal::from_str("19.99").unwrap(),
            stock_quantity: 5,
            sku: "SW-9".to_string(),
            image_url: String::new(),
            is_active: true,
            category_id: 2,
            created_date: "2024-02-02T00:00:00Z".to_string(),
            updated_date: None,
        };
        let form = ProductForm::from_record(&record);
        assert_eq!(form.price, "19.99");
        assert_eq!(form.category_id, Some(2));

        let input = form.to_update_input().unwrap();
        assert_eq!(input.price, record.price);
        assert_eq!(input.created_date, record.created_date);
    }

    #[test]
    fn test_relative_image_url_is_kept_on_edit() {
        let record = Category {
            id: 3,
            category_name: "Tools".to_string(),
            category_description: "Hand tools".to_string(),
            image_url: "img/tools.png".to_string(),
            is_active: true,
            created_date: "2024-01-01T00:00:00Z".to_string(),
            updated_date: None,
        };
        let form = CategoryForm::from_record(&record);
        assert!(form.is_valid());

        let input = form.to_update_input().unwrap();
        assert_eq!(input.image_url, "img/tools.png");
    }
}
