//! # Observability
//!
//! [`setup_tracing`] initializes structured logging for the whole store.
//! Every collection actor and client emits `tracing` events with structured
//! fields (`collection`, `id`, `size`), and request handlers open spans, so
//! the full path of an order placement reads as a hierarchy:
//!
//! ```text
//! INFO place_order: Sending create to actor
//! INFO place_order: Get product_id=product_1
//! INFO place_order: Action ok product_id=product_1
//! INFO place_order: Created order_id=order_1 size=1
//! ```
//!
//! ## Configuration
//!
//! Log levels come from the `RUST_LOG` environment variable:
//!
//! ```bash
//! RUST_LOG=info cargo run            # workflow hierarchy only
//! RUST_LOG=debug cargo run           # full payloads at function entry
//! RUST_LOG=bike_store=debug cargo run
//! ```
//!
//! The compact format hides module paths (`with_target(false)`); the
//! structured `collection` field already says which actor is talking.

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
