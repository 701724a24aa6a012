//! # Order Client
//!
//! High-level API for the order collection. Order placement itself is just a
//! `create` on the collection; the stock lookup and reservation happen in
//! `Order::on_create` inside the order actor.

use crate::model::{Order, OrderCreate};
use crate::order_store::{OrderError, OrderQuery, OrderQueryResult};
use async_trait::async_trait;
use docstore::{CollectionClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for the order collection actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: CollectionClient<Order>,
}

impl OrderClient {
    pub fn new(inner: CollectionClient<Order>) -> Self {
        Self { inner }
    }

    /// Place an order, returning the created record.
    ///
    /// Validation, the product lookup, and the atomic stock reservation all
    /// happen before the record is inserted; a failure at any step creates
    /// no order.
    #[instrument(skip(self, params))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "Sending place_order to collection");
        self.inner
            .create(params)
            .await
            .map_err(OrderError::from_store)
    }

    /// Sum `quantity * total_price` over every order. Zero when no orders
    /// exist.
    #[instrument(skip(self))]
    pub async fn total_revenue(&self) -> Result<f64, OrderError> {
        debug!("Sending revenue query");
        match self.inner.query(OrderQuery::TotalRevenue).await {
            Ok(OrderQueryResult::TotalRevenue(total)) => Ok(total),
            Err(e) => Err(OrderError::from_store(e)),
        }
    }
}

#[async_trait]
impl StoreClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &CollectionClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from_store(e)
    }
}
