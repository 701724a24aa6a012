//! # Product Collection
//!
//! The product catalog as a collection actor, including the one operation
//! beyond CRUD: stock reservation.
//!
//! ## Stock reservation
//!
//! `Reserve(n)` checks availability and decrements the count inside a single
//! action handled by the product actor:
//!
//! ```rust,ignore
//! // Inside the actor, atomically:
//! if self.quantity == 0 || self.quantity < n {
//!     return Err(ProductError::InsufficientStock { .. });
//! }
//! self.quantity -= n;
//! self.in_stock = self.quantity > 0;
//! ```
//!
//! Because the actor processes requests sequentially, two concurrent orders
//! cannot both pass the availability check and then both decrement - the
//! classic oversell race of a separate read-then-write is structurally
//! impossible here.
//!
//! ## Structure
//!
//! - [`document`] - [`Document`](docstore::Document) implementation for
//!   [`Product`], including validation and the derived `in_stock` flag.
//! - [`actions`] - [`ProductAction`] / [`ProductActionResult`].
//! - [`error`] - [`ProductError`].
//! - [`new()`] - factory for the actor and its generic client.

pub mod actions;
pub mod document;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use docstore::{CollectionActor, CollectionClient};

/// Creates the product collection actor and its client.
pub fn new() -> (CollectionActor<Product>, CollectionClient<Product>) {
    CollectionActor::new(32)
}
