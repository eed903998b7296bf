//! Navigation Shell
//!
//! Path-to-view table for the application. No guards, no redirects, no
//! nested routes.
//!
//! | Path | View |
//! |---|---|
//! | `/` | landing page |
//! | `/category-list` | category list |
//! | `/product-list` | product list, optional `?categoryId=N` |

use catalog_core::RecordId;
use dioxus::prelude::*;
use std::fmt;

use crate::pages::{CategoryList, Home, NotFound, ProductList};

/// Query parameter carrying the product filter
pub const CATEGORY_ID_PARAM: &str = "categoryId";

/// Application routes
#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},

    #[route("/category-list")]
    CategoryList {},

    #[route("/product-list?:..query")]
    ProductList { query: ProductQuery },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Unfiltered product list
    pub fn all_products() -> Self {
        Route::ProductList {
            query: ProductQuery::default(),
        }
    }

    /// Product list restricted to one category
    pub fn products_for(category_id: RecordId) -> Self {
        Route::ProductList {
            query: ProductQuery {
                category_id: Some(category_id),
            },
        }
    }

    /// Category filter carried by this route, if any
    pub fn category_filter(&self) -> Option<RecordId> {
        match self {
            Route::ProductList { query } => query.category_id,
            _ => None,
        }
    }
}

// ============================================================================
// Product query
// ============================================================================

/// Query string of the product list
///
/// Unknown parameters are ignored; a `categoryId` that is not an integer is
/// treated as absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductQuery {
    pub category_id: Option<RecordId>,
}

impl ProductQuery {
    pub fn parse(query: &str) -> Self {
        let category_id = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == CATEGORY_ID_PARAM)
            .and_then(|(_, value)| value.trim().parse::<RecordId>().ok());

        Self { category_id }
    }
}

impl FromQuery for ProductQuery {
    fn from_query(query: &str) -> Self {
        Self::parse(query)
    }
}

impl fmt::Display for ProductQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = self.category_id {
            write!(f, "{CATEGORY_ID_PARAM}={id}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
