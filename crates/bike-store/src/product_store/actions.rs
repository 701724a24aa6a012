//! Stock management actions for the product collection.

/// Document-scoped operations on a product beyond plain CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Read the current stock level without modifying it.
    CheckStock,
    /// Atomically check availability and decrement stock by the given amount.
    ///
    /// Fails with [`ProductError::InsufficientStock`](super::ProductError::InsufficientStock)
    /// when the product is out of stock or holds less than the requested
    /// amount. On success the `in_stock` flag is re-derived.
    Reserve(u32),
}

/// Results from product actions; variants match 1:1 with [`ProductAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// The current stock level.
    Stock(u32),
    /// The reservation succeeded.
    Reserved,
}
