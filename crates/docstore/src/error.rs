//! # Store Errors
//!
//! Common error types shared by every collection. Document-specific failures
//! are carried through as boxed [`StoreError::DocumentError`]s so the typed
//! client wrappers can recover them.

/// Errors that can occur within the store runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The collection actor is no longer receiving requests.
    #[error("Collection closed")]
    CollectionClosed,

    /// The collection actor dropped the response channel mid-request.
    #[error("Collection dropped response channel")]
    CollectionDropped,

    /// No document with the given ID exists in the collection.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// A document hook rejected the operation. The boxed error is the
    /// document's own error type and can be downcast by typed clients.
    #[error("Document error: {0}")]
    DocumentError(Box<dyn std::error::Error + Send + Sync>),
}
