//! # Collection Client
//!
//! The generic client half of a collection. Forwards requests over the
//! actor's channel and awaits the response on a oneshot.

use crate::document::Document;
use crate::error::StoreError;
use crate::message::CollectionRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle to a [`CollectionActor`](crate::CollectionActor).
///
/// Holds only the sender side of the request channel, so cloning is cheap and
/// handles can be shared freely across tasks. All methods are async and
/// resolve once the actor has processed the request.
#[derive(Clone)]
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    /// Insert a new document, returning the stored record with its assigned ID.
    pub async fn create(&self, params: T::Create) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Create { params, respond_to })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::CollectionDropped)?
    }

    /// Fetch a document by ID.
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Get { id, respond_to })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::CollectionDropped)?
    }

    /// Fetch every document in the collection.
    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::List { respond_to })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::CollectionDropped)?
    }

    /// Apply an update payload, returning the updated document.
    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::CollectionDropped)?
    }

    /// Remove a document by ID.
    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Delete { id, respond_to })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::CollectionDropped)?
    }

    /// Run a document-scoped action atomically inside the actor.
    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::CollectionDropped)?
    }

    /// Evaluate a collection-scoped query inside the actor.
    pub async fn query(&self, query: T::Query) -> Result<T::QueryResult, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Query { query, respond_to })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::CollectionDropped)?
    }

    /// Ask the actor to stop after the requests already queued.
    ///
    /// Resolves once the actor has acknowledged the request, regardless of
    /// how many other client clones are still alive; later requests from
    /// those clones fail with [`StoreError::CollectionClosed`].
    pub async fn shutdown(&self) -> Result<(), StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CollectionRequest::Shutdown { respond_to })
            .await
            .map_err(|_| StoreError::CollectionClosed)?;
        response.await.map_err(|_| StoreError::CollectionDropped)
    }
}
