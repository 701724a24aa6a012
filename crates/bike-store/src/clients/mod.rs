//! Typed client wrappers over the generic collection clients.
//!
//! The rest of the application never touches raw message passing; it goes
//! through these wrappers, which translate store-level failures back into
//! the domain error enums.

pub mod order_client;
pub mod product_client;

pub use order_client::OrderClient;
pub use product_client::ProductClient;
