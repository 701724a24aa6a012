//! Error type for product operations.

use docstore::StoreError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product does not exist.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// The payload failed format validation.
    #[error("Invalid product payload: {0}")]
    Validation(String),

    /// Communication with the collection actor failed.
    #[error("Product store error: {0}")]
    StoreCommunication(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::StoreCommunication(msg)
    }
}

impl ProductError {
    /// Recover the typed product error from a store-level failure.
    ///
    /// Document errors are carried through the store as boxed trait objects;
    /// this downcasts them back so callers can match on the closed set of
    /// variants instead of strings.
    pub fn from_store(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            StoreError::DocumentError(inner) => match inner.downcast::<ProductError>() {
                Ok(err) => *err,
                Err(other) => ProductError::StoreCommunication(other.to_string()),
            },
            other => ProductError::StoreCommunication(other.to_string()),
        }
    }
}
