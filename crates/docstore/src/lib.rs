//! # In-Process Document Store
//!
//! This crate provides the building blocks for a small, type-safe document
//! store built on the **Actor Model**. Each collection of documents is owned
//! by a single Tokio task (a [`CollectionActor`]) that processes requests
//! sequentially, so mutations of a collection never race each other.
//!
//! ## Why collections as actors?
//!
//! A classic read-then-write sequence against a shared store ("check stock,
//! then decrement it") is a race waiting to happen. By giving each collection
//! exclusive ownership of its documents and funnelling every operation through
//! one message loop, a conditional mutation becomes a single [`Document`]
//! action handled atomically inside the actor. No locks, no transactions, no
//! lost updates.
//!
//! ## Architecture
//!
//! The crate separates three concerns:
//!
//! 1. **Document layer** ([`Document`]) - your domain types and their
//!    validation, update, and action logic.
//! 2. **Runtime layer** ([`CollectionActor`]) - message processing and
//!    exclusive state ownership.
//! 3. **Interface layer** ([`CollectionClient`], [`StoreClient`]) - cheap
//!    cloneable handles for talking to a collection.
//!
//! Every collection supports the same resource-oriented operations: `create`,
//! `get`, `list`, `update`, `delete`, plus two extension points:
//!
//! - **Actions** - document-scoped operations that must run atomically with
//!   respect to other requests (e.g. a conditional stock decrement).
//! - **Queries** - collection-scoped reductions evaluated in one pass over
//!   all documents (e.g. summing revenue), without cloning the collection out.
//!
//! ## Quick start
//!
//! ```rust
//! use docstore::{CollectionActor, Document};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32, text: String }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] struct NoteUpdate { text: Option<String> }
//! #[derive(Debug)] enum NoteAction {}
//! #[derive(Debug, thiserror::Error)]
//! #[error("note error")]
//! struct NoteError;
//!
//! #[async_trait]
//! impl Document for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Action = NoteAction;
//!     type ActionResult = ();
//!     type Query = ();
//!     type QueryResult = usize;
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
//!         Ok(Self { id, text: params.text })
//!     }
//!
//!     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), NoteError> {
//!         if let Some(text) = update.text { self.text = text; }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: NoteAction, _: &()) -> Result<(), NoteError> {
//!         match action {}
//!     }
//!
//!     fn evaluate_query<'a>(docs: impl Iterator<Item = &'a Self>, _: ()) -> usize {
//!         docs.count()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = CollectionActor::<Note>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let note = client.create(NoteCreate { text: "hello".into() }).await.unwrap();
//!     assert_eq!(note.text, "hello");
//!     assert_eq!(client.query(()).await.unwrap(), 1);
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies are injected at runtime via [`CollectionActor::run`], not at
//! construction time. This late binding lets one collection's documents talk
//! to another collection during their lifecycle hooks (e.g. an order
//! reserving product stock in `on_create`) without circular references at
//! construction.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockCollection`](mock::MockCollection), an
//! expectation-based stand-in for a live collection, plus raw channel helpers
//! for asserting the exact requests a client sends.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use client_trait::StoreClient;
pub use document::Document;
pub use error::StoreError;
pub use message::{CollectionRequest, Response};
