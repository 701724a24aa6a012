//! # StoreClient Trait
//!
//! A common interface for collection-specific client wrappers, providing
//! default `get`, `list`, and `delete` methods on top of the generic
//! [`CollectionClient`].

use crate::{CollectionClient, Document, StoreError};
use async_trait::async_trait;

/// Trait for typed client wrappers to inherit the standard read/delete
/// operations.
///
/// A wrapper only supplies access to its inner [`CollectionClient`] and a
/// mapping from [`StoreError`] to its own error type; `get`, `list`, and
/// `delete` come for free. Domain-specific operations (creates with richer
/// return types, actions, queries) stay on the wrapper itself.
#[async_trait]
pub trait StoreClient<T: Document>: Send + Sync {
    /// The collection-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map store errors to the collection-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a document by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every document in the collection.
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending list request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete a document by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Ask the collection actor to stop after the requests already queued.
    async fn shutdown(&self) -> Result<(), Self::Error> {
        tracing::debug!("Sending shutdown request");
        self.inner().shutdown().await.map_err(Self::map_error)
    }
}
