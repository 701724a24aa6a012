//! Error type for order operations.
//!
//! This is the closed failure taxonomy for order placement: payload
//! validation, missing product, business-rule violation (insufficient
//! stock), unconfirmed inventory write, and everything else. The API
//! boundary maps each variant to a status code in one place.

use thiserror::Error;

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The referenced product does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The requested order does not exist.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// The stock decrement could not be confirmed.
    #[error("Inventory update failed: {0}")]
    InventoryUpdateFailed(String),

    /// The payload failed format validation.
    #[error("Invalid order payload: {0}")]
    Validation(String),

    /// Communication with the collection actor failed.
    #[error("Order store error: {0}")]
    StoreCommunication(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::StoreCommunication(msg)
    }
}

impl OrderError {
    /// Recover the typed order error from a store-level failure.
    pub fn from_store(e: docstore::StoreError) -> Self {
        match e {
            docstore::StoreError::NotFound(id) => OrderError::NotFound(id),
            docstore::StoreError::DocumentError(inner) => {
                match inner.downcast::<OrderError>() {
                    Ok(err) => *err,
                    Err(other) => OrderError::StoreCommunication(other.to_string()),
                }
            }
            other => OrderError::StoreCommunication(other.to_string()),
        }
    }
}
