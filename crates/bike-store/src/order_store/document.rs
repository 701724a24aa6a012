//! [`Document`] implementation for [`Order`].

use super::error::OrderError;
use crate::clients::ProductClient;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::product_store::ProductError;
use crate::validation;
use async_trait::async_trait;
use docstore::Document;
use tracing::debug;

/// Orders expose no document-scoped actions; placement is creation.
#[derive(Debug)]
pub enum OrderAction {}

/// Collection-scoped reductions over all orders.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    /// Sum of `quantity * total_price` across every order.
    TotalRevenue,
}

/// Results from order queries; variants match 1:1 with [`OrderQuery`].
#[derive(Debug, Clone, PartialEq)]
pub enum OrderQueryResult {
    TotalRevenue(f64),
}

#[async_trait]
impl Document for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = ();
    type Query = OrderQuery;
    type QueryResult = OrderQueryResult;
    type Context = ProductClient;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        validation::validate_order_create(&params).map_err(OrderError::Validation)?;
        Ok(Self {
            id,
            email: params.email,
            product_id: params.product_id,
            quantity: params.quantity,
            total_price: params.total_price,
        })
    }

    /// The order-placement sequence. Runs before the order is inserted, so a
    /// failure at any step leaves no order record behind.
    async fn on_create(&mut self, products: &ProductClient) -> Result<(), OrderError> {
        debug!(order_id = %self.id, product_id = %self.product_id, "Placing order");

        let available = match products.check_stock(self.product_id.clone()).await {
            Ok(level) => level,
            Err(ProductError::NotFound(id)) => return Err(OrderError::ProductNotFound(id)),
            Err(other) => return Err(OrderError::StoreCommunication(other.to_string())),
        };
        debug!(order_id = %self.id, available, "Product found");

        match products.reserve(self.product_id.clone(), self.quantity).await {
            Ok(()) => Ok(()),
            Err(ProductError::NotFound(id)) => Err(OrderError::ProductNotFound(id)),
            Err(ProductError::InsufficientStock {
                requested,
                available,
            }) => Err(OrderError::InsufficientStock {
                requested,
                available,
            }),
            // The decrement was sent but its outcome never confirmed.
            Err(other) => Err(OrderError::InventoryUpdateFailed(other.to_string())),
        }
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &ProductClient,
    ) -> Result<(), OrderError> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &ProductClient,
    ) -> Result<(), OrderError> {
        match action {}
    }

    /// Full recomputation on every call; there is no incremental maintenance.
    fn evaluate_query<'a>(
        docs: impl Iterator<Item = &'a Self>,
        query: OrderQuery,
    ) -> OrderQueryResult {
        match query {
            OrderQuery::TotalRevenue => {
                let total = docs
                    .map(|order| f64::from(order.quantity) * order.total_price)
                    .sum();
                OrderQueryResult::TotalRevenue(total)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductId;

    fn order(id: u32, quantity: u32, total_price: f64) -> Order {
        Order {
            id: OrderId(id),
            email: "alice@example.com".to_string(),
            product_id: ProductId(1),
            quantity,
            total_price,
        }
    }

    #[test]
    fn create_rejects_bad_email() {
        let params = OrderCreate {
            email: "not-an-email".to_string(),
            product_id: ProductId(1),
            quantity: 2,
            total_price: 20.0,
        };
        let err = Order::from_create_params(OrderId(1), params).unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));
    }

    #[test]
    fn create_rejects_quantity_out_of_bounds() {
        for quantity in [0, 6] {
            let params = OrderCreate {
                email: "alice@example.com".to_string(),
                product_id: ProductId(1),
                quantity,
                total_price: 20.0,
            };
            let err = Order::from_create_params(OrderId(1), params).unwrap_err();
            assert!(matches!(err, OrderError::Validation(_)));
        }
    }

    #[test]
    fn revenue_of_empty_collection_is_zero() {
        let orders: Vec<Order> = vec![];
        let result = Order::evaluate_query(orders.iter(), OrderQuery::TotalRevenue);
        assert_eq!(result, OrderQueryResult::TotalRevenue(0.0));
    }

    #[test]
    fn revenue_sums_quantity_times_total_price() {
        let orders = vec![order(1, 2, 10.0), order(2, 1, 5.0)];
        let result = Order::evaluate_query(orders.iter(), OrderQuery::TotalRevenue);
        assert_eq!(result, OrderQueryResult::TotalRevenue(25.0));
    }
}
