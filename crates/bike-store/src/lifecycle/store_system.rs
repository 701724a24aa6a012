//! The [`StoreSystem`] orchestrator: creates the collection actors, injects
//! their dependencies, hands out typed clients, and coordinates shutdown.

use crate::clients::{OrderClient, ProductClient};
use crate::{order_store, product_store};
use docstore::StoreClient;
use tokio::task::JoinHandle;
use tracing::info;

/// The assembled store: both collection actors running, with typed clients.
///
/// The store is an explicitly owned resource - created once at startup,
/// passed to whatever needs it, and torn down with [`StoreSystem::shutdown`].
pub struct StoreSystem {
    pub products: ProductClient,
    pub orders: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl StoreSystem {
    /// Start both collection actors and wire the order actor to the product
    /// client.
    pub fn new() -> Self {
        let (product_actor, product_inner) = product_store::new();
        let (order_actor, order_inner) = order_store::new();

        let products = ProductClient::new(product_inner);
        let orders = OrderClient::new(order_inner);

        let handles = vec![
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(products.clone())),
        ];

        info!("Store system started");
        Self {
            products,
            orders,
            handles,
        }
    }

    /// Stop both collection actors and wait for them to drain and exit.
    ///
    /// Each actor receives an explicit stop request and exits once the
    /// requests queued ahead of it are processed, so shutdown completes even
    /// while client clones (an API handle, a spawned worker) are still alive.
    /// Those clones observe `CollectionClosed` on any later request.
    ///
    /// Orders stop first: the order actor's context holds a product client,
    /// and stopping in dependency order means no in-flight placement finds
    /// the product collection already gone.
    pub async fn shutdown(self) -> Result<(), String> {
        self.orders.shutdown().await.map_err(|e| e.to_string())?;
        self.products.shutdown().await.map_err(|e| e.to_string())?;

        for handle in self.handles {
            handle.await.map_err(|e| e.to_string())?;
        }
        info!("Store system shut down");
        Ok(())
    }
}

impl Default for StoreSystem {
    fn default() -> Self {
        Self::new()
    }
}
