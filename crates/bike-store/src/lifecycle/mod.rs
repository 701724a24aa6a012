//! # System Lifecycle & Orchestration
//!
//! Individual collection actors are simple; wiring them together is where
//! the coordination lives. [`StoreSystem`] is the conductor: it creates the
//! collection actors, injects their dependencies, hands out typed clients,
//! and coordinates a clean shutdown.
//!
//! ## Dependency injection via context
//!
//! Actors are created without dependencies, then wired when started:
//! the product actor needs nothing (`run(())`), while the order actor
//! receives a [`ProductClient`](crate::clients::ProductClient) so
//! `Order::on_create` can check and reserve stock. This late binding keeps
//! the construction order trivial and the dependency graph explicit.
//!
//! ## Shutdown
//!
//! [`StoreSystem::shutdown`] sends each actor an explicit stop request
//! (orders first, since the order actor depends on the product client),
//! then awaits every actor task. Actors exit after draining the requests
//! already queued, so shutdown completes even while other client clones
//! are still alive; those clones see `CollectionClosed` afterwards.

pub mod store_system;
pub mod tracing;

pub use self::store_system::StoreSystem;
pub use self::tracing::setup_tracing;
