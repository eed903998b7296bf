//! Table rows
//!
//! Display-ready rows for the category and product tables. Numbering is
//! 1-based and follows the order the service returned.

use catalog_core::{Category, Product, RecordId, category_name};

/// One row of the category table
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub number: usize,
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub active: bool,
}

/// One row of the product table
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub number: usize,
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: u32,
    pub sku: String,
    /// Resolved category name, `"-"` when unknown
    pub category: String,
    pub active: bool,
}

pub fn category_rows(categories: &[Category]) -> Vec<CategoryRow> {
    categories
        .iter()
        .enumerate()
        .map(|(idx, c)| CategoryRow {
            number: idx + 1,
            id: c.id,
            name: c.category_name.clone(),
            description: c.category_description.clone(),
            active: c.is_active,
        })
        .collect()
}

/// Product rows with each `categoryId` resolved against `categories`
pub fn product_rows(products: &[Product], categories: &[Category]) -> Vec<ProductRow> {
    products
        .iter()
        .enumerate()
        .map(|(idx, p)| ProductRow {
            number: idx + 1,
            id: p.id,
            name: p.product_name.clone(),
            description: p.product_description.clone(),
            price: p.price.to_string(),
            stock: p.stock_quantity,
            sku: p.sku.clone(),
            category: category_name(categories, p.category_id).to_string(),
            active: p.is_active,
        })
        .collect()
}
