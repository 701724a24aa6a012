//! The purchase record.
//!
//! Orders are only ever created through order placement; once placed they are
//! immutable. Each order references exactly one product, and deleting a
//! product does not affect the orders that reference it.

use crate::model::ProductId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A purchase of one product by one customer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub email: String,
    #[serde(rename = "product")]
    pub product_id: ProductId,
    pub quantity: u32,
    pub total_price: f64,
}

/// Payload for placing an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub email: String,
    #[serde(rename = "product")]
    pub product_id: ProductId,
    pub quantity: u32,
    pub total_price: f64,
}

/// Orders are immutable once placed; there is no valid update payload.
#[derive(Debug)]
pub enum OrderUpdate {}
