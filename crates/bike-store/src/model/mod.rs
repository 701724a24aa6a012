//! Domain records and their data-transfer payloads.

pub mod order;
pub mod product;

pub use order::{Order, OrderCreate, OrderId, OrderUpdate};
pub use product::{Category, Product, ProductCreate, ProductId, ProductUpdate};
