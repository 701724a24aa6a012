//! # JSON Request/Response Layer
//!
//! Maps each logical operation onto a parsed payload, a client call, and a
//! uniform JSON envelope. HTTP routing itself is an external concern; a
//! router binds verb+path to one handler here and writes out
//! [`ApiResponse::status`] and the serialized [`ApiResponse::body`].
//!
//! Success envelope: `{message, success: true, data}`.
//! Error envelope: `{message, success: false, error}`.
//!
//! The error-to-status mapping is centralized in this module rather than
//! per handler: validation failures map to 400, missing records to 404,
//! business-rule violations (insufficient stock) to 422, and unconfirmed or
//! unexpected store failures to 500.
//!
//! Order payloads are validated here, before anything is sent to a
//! collection actor; a malformed order never reaches the store.

use crate::clients::{OrderClient, ProductClient};
use crate::model::{OrderCreate, ProductCreate, ProductId};
use crate::order_store::OrderError;
use crate::product_store::ProductError;
use crate::validation;
use docstore::StoreClient;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::instrument;

/// The JSON body of every response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A status code plus the envelope to serialize.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Envelope,
}

impl ApiResponse {
    fn success(message: &str, data: Value) -> Self {
        Self {
            status: 200,
            body: Envelope {
                message: message.to_string(),
                success: true,
                data: Some(data),
                error: None,
            },
        }
    }

    fn ok(message: &str, data: &impl Serialize) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self::success(message, value),
            Err(e) => Self::failure(500, e.to_string()),
        }
    }

    fn failure(status: u16, detail: String) -> Self {
        Self {
            status,
            body: Envelope {
                message: "Something went wrong".to_string(),
                success: false,
                data: None,
                error: Some(detail),
            },
        }
    }

    fn bad_payload(detail: String) -> Self {
        Self::failure(400, detail)
    }
}

fn product_status(e: &ProductError) -> u16 {
    match e {
        ProductError::Validation(_) => 400,
        ProductError::NotFound(_) => 404,
        ProductError::InsufficientStock { .. } => 422,
        ProductError::StoreCommunication(_) => 500,
    }
}

fn order_status(e: &OrderError) -> u16 {
    match e {
        OrderError::Validation(_) => 400,
        OrderError::ProductNotFound(_) | OrderError::NotFound(_) => 404,
        OrderError::InsufficientStock { .. } => 422,
        OrderError::InventoryUpdateFailed(_) | OrderError::StoreCommunication(_) => 500,
    }
}

impl From<ProductError> for ApiResponse {
    fn from(e: ProductError) -> Self {
        ApiResponse::failure(product_status(&e), e.to_string())
    }
}

impl From<OrderError> for ApiResponse {
    fn from(e: OrderError) -> Self {
        ApiResponse::failure(order_status(&e), e.to_string())
    }
}

/// Body of `POST /products`.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub product: ProductCreate,
}

/// Body of `POST /orders`.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    #[serde(rename = "orderData")]
    pub order_data: OrderCreate,
}

/// One handler per logical operation, bound to the typed clients.
#[derive(Clone)]
pub struct BikeStoreApi {
    products: ProductClient,
    orders: OrderClient,
}

impl BikeStoreApi {
    pub fn new(products: ProductClient, orders: OrderClient) -> Self {
        Self { products, orders }
    }

    /// `POST /products`
    #[instrument(skip(self, body))]
    pub async fn create_product(&self, body: Value) -> ApiResponse {
        let req: CreateProductRequest = match serde_json::from_value(body) {
            Ok(req) => req,
            Err(e) => return ApiResponse::bad_payload(e.to_string()),
        };
        match self.products.create_product(req.product).await {
            Ok(product) => ApiResponse::ok("Bike created successfully", &product),
            Err(e) => e.into(),
        }
    }

    /// `GET /products`
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ApiResponse {
        match self.products.list().await {
            Ok(products) => ApiResponse::ok("Bikes retrieved successfully", &products),
            Err(e) => e.into(),
        }
    }

    /// `GET /products/{id}`
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: u32) -> ApiResponse {
        let id = ProductId(id);
        match self.products.get(id.clone()).await {
            Ok(Some(product)) => ApiResponse::ok("Bike retrieved successfully", &product),
            Ok(None) => ProductError::NotFound(id.to_string()).into(),
            Err(e) => e.into(),
        }
    }

    /// `PUT /products/{id}`
    #[instrument(skip(self, body))]
    pub async fn update_product(&self, id: u32, body: Value) -> ApiResponse {
        let update = match serde_json::from_value(body) {
            Ok(update) => update,
            Err(e) => return ApiResponse::bad_payload(e.to_string()),
        };
        match self.products.update_product(ProductId(id), update).await {
            Ok(product) => ApiResponse::ok("Bike updated successfully", &product),
            Err(e) => e.into(),
        }
    }

    /// `DELETE /products/{id}`
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u32) -> ApiResponse {
        match self.products.delete(ProductId(id)).await {
            Ok(()) => ApiResponse::success("Bike deleted successfully", json!({})),
            Err(e) => e.into(),
        }
    }

    /// `POST /orders`
    #[instrument(skip(self, body))]
    pub async fn place_order(&self, body: Value) -> ApiResponse {
        let req: PlaceOrderRequest = match serde_json::from_value(body) {
            Ok(req) => req,
            Err(e) => return ApiResponse::bad_payload(e.to_string()),
        };
        // Reject malformed orders before they reach any collection actor.
        if let Err(detail) = validation::validate_order_create(&req.order_data) {
            return ApiResponse::bad_payload(detail);
        }
        match self.orders.place_order(req.order_data).await {
            Ok(order) => ApiResponse::ok("Order created successfully", &order),
            Err(e) => e.into(),
        }
    }

    /// `GET /orders/revenue`
    #[instrument(skip(self))]
    pub async fn revenue(&self) -> ApiResponse {
        match self.orders.total_revenue().await {
            Ok(total) => ApiResponse::success(
                "Revenue calculated successfully",
                json!({ "totalRevenue": total }),
            ),
            Err(e) => e.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::StoreSystem;
    use crate::model::{Order, Product};
    use docstore::mock::MockCollection;

    fn api(system: &StoreSystem) -> BikeStoreApi {
        BikeStoreApi::new(system.products.clone(), system.orders.clone())
    }

    fn bike_payload(name: &str, quantity: u32) -> Value {
        json!({
            "product": {
                "name": name,
                "brand": "Acme",
                "price": 499.0,
                "category": "Mountain",
                "description": "A sturdy mountain bike",
                "quantity": quantity,
            }
        })
    }

    fn order_payload(product_id: u32, quantity: u32, total_price: f64) -> Value {
        json!({
            "orderData": {
                "email": "alice@example.com",
                "product": product_id,
                "quantity": quantity,
                "totalPrice": total_price,
            }
        })
    }

    #[tokio::test]
    async fn create_product_returns_envelope_with_derived_in_stock() {
        let system = StoreSystem::new();
        let api = api(&system);

        let response = api.create_product(bike_payload("Trailblazer", 10)).await;
        assert_eq!(response.status, 200);
        assert!(response.body.success);
        assert_eq!(response.body.message, "Bike created successfully");

        let data = response.body.data.unwrap();
        assert_eq!(data["name"], "Trailblazer");
        assert_eq!(data["inStock"], true);
        assert_eq!(data["quantity"], 10);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn create_product_maps_validation_to_400() {
        let system = StoreSystem::new();
        let api = api(&system);

        let response = api.create_product(bike_payload("trailblazer", 10)).await;
        assert_eq!(response.status, 400);
        assert!(!response.body.success);
        assert!(response.body.error.is_some());

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn get_missing_product_maps_to_404() {
        let system = StoreSystem::new();
        let api = api(&system);

        let response = api.get_product(99).await;
        assert_eq!(response.status, 404);
        assert!(!response.body.success);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn delete_twice_second_is_404() {
        let system = StoreSystem::new();
        let api = api(&system);

        api.create_product(bike_payload("Trailblazer", 10)).await;

        let first = api.delete_product(1).await;
        assert_eq!(first.status, 200);
        assert_eq!(first.body.data, Some(json!({})));

        let second = api.delete_product(1).await;
        assert_eq!(second.status, 404);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn insufficient_stock_maps_to_422() {
        let system = StoreSystem::new();
        let api = api(&system);

        api.create_product(bike_payload("Trailblazer", 1)).await;
        let response = api.place_order(order_payload(1, 2, 998.0)).await;
        assert_eq!(response.status, 422);
        assert!(!response.body.success);

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn revenue_envelope_shape() {
        let system = StoreSystem::new();
        let api = api(&system);

        let empty = api.revenue().await;
        assert_eq!(empty.status, 200);
        assert_eq!(empty.body.data, Some(json!({ "totalRevenue": 0.0 })));

        api.create_product(bike_payload("Trailblazer", 10)).await;
        let placed = api.place_order(order_payload(1, 2, 10.0)).await;
        assert_eq!(placed.status, 200);

        let after = api.revenue().await;
        assert_eq!(after.body.data, Some(json!({ "totalRevenue": 20.0 })));

        system.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn shutdown_completes_while_api_handles_are_alive() {
        let system = StoreSystem::new();
        let api = api(&system);

        api.create_product(bike_payload("Trailblazer", 1)).await;

        // The api still holds client clones; shutdown must not wait on them.
        system.shutdown().await.unwrap();

        // Afterwards the surviving handle reports a store failure.
        let response = api.list_products().await;
        assert_eq!(response.status, 500);
        assert!(!response.body.success);
    }

    #[tokio::test]
    async fn malformed_orders_never_reach_the_store() {
        // Mock collections with zero expectations: any request would panic
        // the mock task and surface as a store error instead of a 400.
        let product_mock = MockCollection::<Product>::new();
        let order_mock = MockCollection::<Order>::new();
        let api = BikeStoreApi::new(
            ProductClient::new(product_mock.client()),
            OrderClient::new(order_mock.client()),
        );

        let over_limit = api.place_order(order_payload(1, 6, 60.0)).await;
        assert_eq!(over_limit.status, 400);

        let bad_email = api
            .place_order(json!({
                "orderData": {
                    "email": "not-an-email",
                    "product": 1,
                    "quantity": 2,
                    "totalPrice": 20.0,
                }
            }))
            .await;
        assert_eq!(bad_email.status, 400);

        let not_json_shaped = api.place_order(json!({ "order": {} })).await;
        assert_eq!(not_json_shaped.status, 400);

        product_mock.verify();
        order_mock.verify();
    }
}
