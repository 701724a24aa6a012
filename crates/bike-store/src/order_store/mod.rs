//! # Order Collection
//!
//! Orders live in their own collection actor, with the product client
//! injected as context. The whole order-placement sequence runs in
//! [`Order::on_create`](docstore::Document::on_create):
//!
//! 1. Check the product's stock - fail with `ProductNotFound` if absent.
//! 2. Send `Reserve(quantity)` to the product actor, which atomically checks
//!    and decrements stock (`InsufficientStock` on shortfall). The level read
//!    in step 1 is advisory only; the reserve is the authoritative check.
//! 3. Only then is the order record inserted; any failure above means no
//!    order exists and the product is untouched.
//!
//! The collection also answers the [`OrderQuery::TotalRevenue`] reduction,
//! evaluated in one pass inside the actor.
//!
//! ## Structure
//!
//! - [`document`] - [`Document`](docstore::Document) implementation for
//!   [`Order`], including the placement hook and the revenue query.
//! - [`error`] - [`OrderError`].
//! - [`new()`] - factory for the actor and its generic client.

pub mod document;
pub mod error;

pub use document::{OrderAction, OrderQuery, OrderQueryResult};
pub use error::*;

use crate::model::Order;
use docstore::{CollectionActor, CollectionClient};

/// Creates the order collection actor and its client.
pub fn new() -> (CollectionActor<Order>, CollectionClient<Order>) {
    CollectionActor::new(32)
}
