//! The product catalog record.
//!
//! A `Product` is a bike listed in the catalog, with a price, a fixed
//! category, and a stock count. The `in_stock` flag is derived from the
//! stock count and re-derived after every mutation; it never comes from a
//! payload.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

/// The fixed set of bike categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Mountain,
    Road,
    Hybrid,
    Electric,
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Mountain => "Mountain",
            Category::Road => "Road",
            Category::Hybrid => "Hybrid",
            Category::Electric => "Electric",
        };
        write!(f, "{name}")
    }
}

/// A catalog item with price, category, and stock quantity.
///
/// Invariant: `in_stock == (quantity > 0)` holds after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub category: Category,
    pub description: String,
    pub quantity: u32,
    pub in_stock: bool,
}

/// Payload for creating a product. `in_stock` is derived, not supplied.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub category: Category,
    pub description: String,
    pub quantity: u32,
}

/// Partial update payload; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub quantity: Option<u32>,
}
