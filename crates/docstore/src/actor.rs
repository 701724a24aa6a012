//! # Collection Actor
//!
//! The `CollectionActor` is the server half of a collection. It owns the
//! documents and processes all incoming requests sequentially, guaranteeing
//! exclusive access to the collection state without any locking.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::StoreError;
use crate::message::CollectionRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns one collection of documents.
///
/// # Concurrency model
/// Each `CollectionActor` runs in its own Tokio task and processes one
/// message at a time. Actions and queries therefore observe and mutate the
/// collection atomically: a conditional stock decrement cannot interleave
/// with another order's decrement, which is exactly the guarantee a bare
/// read-then-write against a shared store cannot give.
///
/// # Lifecycle
/// 1. **Create** the actor and its client with [`CollectionActor::new`].
/// 2. **Wire** dependencies by passing a context into [`CollectionActor::run`].
/// 3. **Run** the loop in a spawned task; it exits when every client handle
///    has been dropped or an explicit shutdown request is received.
pub struct CollectionActor<T: Document> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    documents: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: Document> CollectionActor<T> {
    /// Creates a new collection actor and its associated client.
    ///
    /// `buffer_size` is the capacity of the request channel; senders wait
    /// when it is full.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            documents: HashMap::new(),
            next_id: 1,
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until every client
    /// handle is dropped or a shutdown request arrives.
    ///
    /// The `context` is injected into every document hook, so documents can
    /// reach other collections that were wired up after this actor was
    /// constructed.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g. "Product" instead of the full path)
        let collection = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(collection, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Create { params, respond_to } => {
                    debug!(collection, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut doc) => {
                            if let Err(e) = doc.on_create(&context).await {
                                warn!(collection, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                                continue;
                            }
                            self.documents.insert(id.clone(), doc.clone());
                            info!(collection, %id, size = self.documents.len(), "Created");
                            let _ = respond_to.send(Ok(doc));
                        }
                        Err(e) => {
                            warn!(collection, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                        }
                    }
                }
                CollectionRequest::Get { id, respond_to } => {
                    let doc = self.documents.get(&id).cloned();
                    let found = doc.is_some();
                    debug!(collection, %id, found, "Get");
                    let _ = respond_to.send(Ok(doc));
                }
                CollectionRequest::List { respond_to } => {
                    debug!(collection, size = self.documents.len(), "List");
                    let docs = self.documents.values().cloned().collect();
                    let _ = respond_to.send(Ok(docs));
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(collection, %id, ?update, "Update");
                    if let Some(doc) = self.documents.get_mut(&id) {
                        if let Err(e) = doc.on_update(update, &context).await {
                            warn!(collection, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                            continue;
                        }
                        info!(collection, %id, "Updated");
                        let _ = respond_to.send(Ok(doc.clone()));
                    } else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(collection, %id, "Delete");
                    if let Some(doc) = self.documents.get(&id) {
                        if let Err(e) = doc.on_delete(&context).await {
                            warn!(collection, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(StoreError::DocumentError(Box::new(e))));
                            continue;
                        }
                        self.documents.remove(&id);
                        info!(collection, %id, size = self.documents.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                CollectionRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(collection, %id, ?action, "Action");
                    if let Some(doc) = self.documents.get_mut(&id) {
                        let result = doc
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| StoreError::DocumentError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(collection, %id, "Action ok"),
                            Err(e) => warn!(collection, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(collection, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                CollectionRequest::Query { query, respond_to } => {
                    debug!(collection, ?query, "Query");
                    let result = T::evaluate_query(self.documents.values(), query);
                    let _ = respond_to.send(Ok(result));
                }
                CollectionRequest::Shutdown { respond_to } => {
                    info!(collection, "Shutdown requested");
                    let _ = respond_to.send(());
                    break;
                }
            }
        }

        info!(collection, size = self.documents.len(), "Shutdown");
    }
}
