//! # Bike Store Backend
//!
//! A small e-commerce backend for a bike shop: CRUD over products, order
//! placement that atomically reserves stock, and a revenue aggregation query.
//! Built on the [`docstore`] collection-actor store.
//!
//! ## Layout
//!
//! - [`model`] - the `Product` and `Order` records and their DTOs.
//! - [`product_store`] / [`order_store`] - [`Document`](docstore::Document)
//!   implementations wiring the records into collection actors, including
//!   the stock reservation action and the revenue query.
//! - [`clients`] - typed wrappers ([`ProductClient`](clients::ProductClient),
//!   [`OrderClient`](clients::OrderClient)) over the generic collection
//!   clients.
//! - [`validation`] - payload format rules shared by the API boundary and
//!   the documents themselves.
//! - [`api`] - the JSON request/response layer: envelopes, typed payloads,
//!   and the centralized error-to-status mapping. HTTP routing itself is an
//!   external concern.
//! - [`lifecycle`] - the [`StoreSystem`](lifecycle::StoreSystem) orchestrator
//!   that starts the collection actors, wires their dependencies, and shuts
//!   them down cleanly.
//!
//! ## Order placement
//!
//! The one operation with real logic. `Order::on_create` runs inside the
//! order collection actor with a [`ProductClient`](clients::ProductClient)
//! injected as context: it checks the product's stock, sends a `Reserve`
//! action to the product actor (which checks and decrements stock in one
//! atomic step), and only then is the order record inserted. Concurrent orders against the
//! same product serialize on the product actor, so stock can never be
//! oversold.

pub mod api;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_store;
pub mod product_store;
pub mod validation;
