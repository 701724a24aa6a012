//! # Collection Messages
//!
//! The request types exchanged between a [`CollectionClient`](crate::CollectionClient)
//! and its [`CollectionActor`](crate::CollectionActor).

use crate::document::Document;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by collection actors.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Request sent to a collection actor.
///
/// The variants map onto the standard resource lifecycle (create, read,
/// update, delete) plus three extensions:
///
/// - `List` - fetch every document in the collection.
/// - `Action` - run a document-scoped operation atomically inside the actor.
/// - `Query` - evaluate a collection-scoped reduction inside the actor.
/// - `Shutdown` - stop the actor without waiting for every sender clone to
///   be dropped.
///
/// The payload types all come from the [`Document`] associated types, so a
/// request for one collection can never be sent to another.
#[derive(Debug)]
pub enum CollectionRequest<T: Document> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Query {
        query: T::Query,
        respond_to: Response<T::QueryResult>,
    },
    /// Stop the actor after the requests queued ahead of this one.
    Shutdown {
        respond_to: oneshot::Sender<()>,
    },
}
