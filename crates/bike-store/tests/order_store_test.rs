//! Order actor with mocked product dependency.
//!
//! Exercises the real order collection actor (placement logic in
//! `Order::on_create`) while isolating it from the product actor.

use bike_store::clients::{OrderClient, ProductClient};
use bike_store::model::{OrderCreate, Product, ProductId};
use bike_store::order_store;
use bike_store::order_store::OrderError;
use bike_store::product_store::{ProductActionResult, ProductError};
use docstore::mock::MockCollection;
use docstore::{StoreClient, StoreError};

fn params(product_id: u32, quantity: u32) -> OrderCreate {
    OrderCreate {
        email: "alice@example.com".to_string(),
        product_id: ProductId(product_id),
        quantity,
        total_price: 998.0,
    }
}

#[tokio::test]
async fn placement_checks_stock_then_reserves_then_records_the_order() {
    let mut product_mock = MockCollection::<Product>::new();

    // Order::on_create checks the product's stock, then reserves.
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::Stock(10));
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::Reserved);

    let product_client = ProductClient::new(product_mock.client());

    let (order_actor, order_inner) = order_store::new();
    let order_client = OrderClient::new(order_inner);
    let actor_handle = tokio::spawn(order_actor.run(product_client));

    let order = order_client.place_order(params(1, 3)).await.unwrap();
    assert_eq!(order.product_id, ProductId(1));
    assert_eq!(order.quantity, 3);

    // The record is retrievable from the real actor.
    let fetched = order_client.get(order.id.clone()).await.unwrap();
    assert_eq!(fetched, Some(order));

    product_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn placement_fails_when_product_is_missing() {
    let mut product_mock = MockCollection::<Product>::new();
    product_mock
        .expect_action(ProductId(7))
        .return_err(StoreError::NotFound(ProductId(7).to_string()));

    let product_client = ProductClient::new(product_mock.client());

    let (order_actor, order_inner) = order_store::new();
    let order_client = OrderClient::new(order_inner);
    let actor_handle = tokio::spawn(order_actor.run(product_client));

    let err = order_client.place_order(params(7, 1)).await.unwrap_err();
    assert!(matches!(err, OrderError::ProductNotFound(_)));

    // No order was recorded.
    assert!(order_client.list().await.unwrap().is_empty());

    product_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn placement_surfaces_insufficient_stock() {
    let mut product_mock = MockCollection::<Product>::new();
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::Stock(2));
    product_mock
        .expect_action(ProductId(1))
        .return_err(StoreError::DocumentError(Box::new(
            ProductError::InsufficientStock {
                requested: 5,
                available: 2,
            },
        )));

    let product_client = ProductClient::new(product_mock.client());

    let (order_actor, order_inner) = order_store::new();
    let order_client = OrderClient::new(order_inner);
    let actor_handle = tokio::spawn(order_actor.run(product_client));

    let err = order_client.place_order(params(1, 5)).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::InsufficientStock {
            requested: 5,
            available: 2
        }
    );
    assert!(order_client.list().await.unwrap().is_empty());

    product_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn unconfirmed_inventory_write_maps_to_inventory_update_failed() {
    let mut product_mock = MockCollection::<Product>::new();
    product_mock
        .expect_action(ProductId(1))
        .return_ok(ProductActionResult::Stock(10));
    // The reserve is sent but its outcome is never confirmed.
    product_mock
        .expect_action(ProductId(1))
        .return_err(StoreError::CollectionDropped);

    let product_client = ProductClient::new(product_mock.client());

    let (order_actor, order_inner) = order_store::new();
    let order_client = OrderClient::new(order_inner);
    let actor_handle = tokio::spawn(order_actor.run(product_client));

    let err = order_client.place_order(params(1, 2)).await.unwrap_err();
    assert!(matches!(err, OrderError::InventoryUpdateFailed(_)));
    assert!(order_client.list().await.unwrap().is_empty());

    product_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn malformed_payload_is_rejected_by_the_document_itself() {
    // Even bypassing the API boundary, the order document validates its own
    // creation payload before touching the product collection.
    let product_mock = MockCollection::<Product>::new();
    let product_client = ProductClient::new(product_mock.client());

    let (order_actor, order_inner) = order_store::new();
    let order_client = OrderClient::new(order_inner);
    let actor_handle = tokio::spawn(order_actor.run(product_client));

    let err = order_client.place_order(params(1, 6)).await.unwrap_err();
    assert!(matches!(err, OrderError::Validation(_)));

    // The product collection was never consulted.
    product_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}
