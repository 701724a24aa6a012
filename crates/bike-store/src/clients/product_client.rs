//! # Product Client
//!
//! High-level API for the product collection. Wraps a
//! `CollectionClient<Product>` and exposes domain-specific methods; `get`,
//! `list`, and `delete` come from the [`StoreClient`] trait.

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_store::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use docstore::{CollectionClient, StoreClient, StoreError};
use tracing::{debug, instrument};

/// Client for the product collection actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: CollectionClient<Product>,
}

impl ProductClient {
    pub fn new(inner: CollectionClient<Product>) -> Self {
        Self { inner }
    }

    /// Validate and insert a product, returning the stored record.
    #[instrument(skip(self, params))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!(?params, "Sending create request");
        self.inner
            .create(params)
            .await
            .map_err(ProductError::from_store)
    }

    /// Apply a partial update, returning the updated record.
    #[instrument(skip(self, update))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!(%id, ?update, "Sending update request");
        self.inner
            .update(id, update)
            .await
            .map_err(ProductError::from_store)
    }

    /// Read the current stock level of a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!(%id, "Checking stock");
        match self
            .inner
            .perform_action(id, ProductAction::CheckStock)
            .await
        {
            Ok(ProductActionResult::Stock(level)) => Ok(level),
            Ok(_) => unreachable!("CheckStock action must return Stock result"),
            Err(e) => Err(ProductError::from_store(e)),
        }
    }

    /// Atomically reserve stock for a product.
    ///
    /// Fails with [`ProductError::InsufficientStock`] when the product holds
    /// less than the requested amount, leaving the product unmodified.
    #[instrument(skip(self))]
    pub async fn reserve(&self, id: ProductId, quantity: u32) -> Result<(), ProductError> {
        debug!(%id, quantity, "Reserving stock");
        match self
            .inner
            .perform_action(id, ProductAction::Reserve(quantity))
            .await
        {
            Ok(ProductActionResult::Reserved) => Ok(()),
            Ok(_) => unreachable!("Reserve action must return Reserved result"),
            Err(e) => Err(ProductError::from_store(e)),
        }
    }
}

#[async_trait]
impl StoreClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &CollectionClient<Product> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        ProductError::from_store(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstore::mock::{expect_action, mock_client};

    #[tokio::test]
    async fn check_stock_returns_level() {
        let (client, mut receiver) = mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task =
            tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert!(matches!(action, ProductAction::CheckStock));

        responder.send(Ok(ProductActionResult::Stock(42))).unwrap();

        assert_eq!(check_task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn reserve_sends_the_requested_quantity() {
        let (client, mut receiver) = mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let reserve_task =
            tokio::spawn(async move { product_client.reserve(ProductId(1), 5).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        match action {
            ProductAction::Reserve(amount) => assert_eq!(amount, 5),
            other => panic!("Expected Reserve action, got {other:?}"),
        }

        responder.send(Ok(ProductActionResult::Reserved)).unwrap();
        assert!(reserve_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn reserve_recovers_the_typed_insufficient_stock_error() {
        let (client, mut receiver) = mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let reserve_task =
            tokio::spawn(async move { product_client.reserve(ProductId(1), 100).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(StoreError::DocumentError(Box::new(
                ProductError::InsufficientStock {
                    requested: 100,
                    available: 3,
                },
            ))))
            .unwrap();

        let err = reserve_task.await.unwrap().unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock {
                requested: 100,
                available: 3
            }
        );
    }
}
