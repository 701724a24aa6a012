//! # Document Trait
//!
//! The [`Document`] trait is the contract every stored record type must
//! implement to be managed by a [`CollectionActor`](crate::CollectionActor).
//! It specifies associated types for IDs, DTOs, actions, queries, context,
//! and errors, and provides the lifecycle hooks the actor invokes.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Contract for any record type managed by a collection actor.
///
/// # Associated types
/// The associated types pin every operation to the right payload at compile
/// time: a `Product` collection only accepts a `ProductCreate`, and you cannot
/// accidentally send it an `OrderCreate`.
///
/// # Async & context
/// Hooks are async (via `#[async_trait]`) so a document can call other
/// collections while being created, updated, or deleted. The `Context` type
/// carries those dependencies; it is supplied to
/// [`CollectionActor::run`](crate::CollectionActor::run) rather than at
/// construction, which keeps dependency wiring acyclic.
///
/// # Error granularity
/// Each document type defines a single error enum covering all its
/// operations. Clients then match on one well-known type instead of a
/// different error per message.
#[async_trait]
pub trait Document: Clone + Send + Sync + 'static {
    /// Unique identifier, assigned by the collection on insert.
    /// Must be convertible from `u32` for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new document.
    type Create: Send + Sync + Debug;

    /// Payload describing a (possibly partial) update.
    type Update: Send + Sync + Debug;

    /// Document-scoped operation that must run atomically with respect to
    /// every other request against the collection (e.g. `Reserve(3)`).
    type Action: Send + Sync + Debug;

    /// Result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Collection-scoped reduction request (e.g. `TotalRevenue`).
    /// Use `()` if the collection has no queries.
    type Query: Send + Sync + Debug;

    /// Result type returned by queries.
    type QueryResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook.
    /// Use `()` if none are needed.
    type Context: Send + Sync;

    /// The error type for this document's operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct and validate the full document from the assigned ID and the
    /// creation payload. Called synchronously before [`Document::on_create`].
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the document is inserted. A failure
    /// here aborts the insert, so this is where cross-collection side effects
    /// belong (the document is only persisted once they succeed).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update payload to the document.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the document is removed. A failure aborts
    /// the removal.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a document-scoped action. Runs inside the actor loop, so the
    /// whole check-and-mutate sequence is atomic.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Evaluate a collection-scoped query in one pass over all documents.
    /// Runs inside the actor loop; no document is cloned out.
    fn evaluate_query<'a>(
        docs: impl Iterator<Item = &'a Self>,
        query: Self::Query,
    ) -> Self::QueryResult
    where
        Self: 'a;
}
