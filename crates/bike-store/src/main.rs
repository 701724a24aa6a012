//! Demo entry point: start the store, stock a bike, place an order, and
//! report revenue, exercising the same JSON surface an HTTP router would
//! bind to.

use bike_store::api::BikeStoreApi;
use bike_store::lifecycle::{setup_tracing, StoreSystem};
use serde_json::json;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting bike store");

    let system = StoreSystem::new();
    let api = BikeStoreApi::new(system.products.clone(), system.orders.clone());

    let span = tracing::info_span!("catalog_setup");
    let product_id = async {
        info!("Creating demo product");
        let response = api
            .create_product(json!({
                "product": {
                    "name": "Trailblazer",
                    "brand": "Acme",
                    "price": 499.0,
                    "category": "Mountain",
                    "description": "A sturdy mountain bike",
                    "quantity": 10,
                }
            }))
            .await;
        if !response.body.success {
            return Err(response.body.error.unwrap_or_default());
        }
        let data = response.body.data.ok_or("missing response data")?;
        data["id"].as_u64().ok_or_else(|| "missing product id".to_string())
    }
    .instrument(span)
    .await?;

    info!(product_id, "Product created");

    let span = tracing::info_span!("order_processing");
    let order_response = async {
        info!("Placing demo order");
        api.place_order(json!({
            "orderData": {
                "email": "alice@example.com",
                "product": product_id,
                "quantity": 2,
                "totalPrice": 998.0,
            }
        }))
        .await
    }
    .instrument(span)
    .await;

    if order_response.body.success {
        info!("Order placed");
    } else {
        error!(error = ?order_response.body.error, "Order placement failed");
    }

    let revenue = api.revenue().await;
    info!(data = %serde_json::to_string(&revenue.body).map_err(|e| e.to_string())?, "Revenue");

    system.shutdown().await?;

    info!("Bike store stopped");
    Ok(())
}
