//! [`Document`] implementation for [`Product`].
//!
//! Creation and updates validate the payload and re-derive the `in_stock`
//! flag, so the invariant `in_stock == (quantity > 0)` holds after every
//! mutation no matter which path performed it.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::validation;
use async_trait::async_trait;
use docstore::Document;

#[async_trait]
impl Document for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Query = ();
    type QueryResult = ();
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        validation::validate_product_create(&params).map_err(ProductError::Validation)?;
        Ok(Self {
            id,
            name: params.name,
            brand: params.brand,
            price: params.price,
            category: params.category,
            description: params.description,
            quantity: params.quantity,
            in_stock: params.quantity > 0,
        })
    }

    /// Partial field merge; absent fields stay as they are.
    async fn on_update(
        &mut self,
        update: ProductUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), ProductError> {
        validation::validate_product_update(&update).map_err(ProductError::Validation)?;
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(brand) = update.brand {
            self.brand = brand;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        self.in_stock = self.quantity > 0;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::Stock(self.quantity)),
            ProductAction::Reserve(requested) => {
                if self.quantity == 0 || self.quantity < requested {
                    return Err(ProductError::InsufficientStock {
                        requested,
                        available: self.quantity,
                    });
                }
                self.quantity -= requested;
                self.in_stock = self.quantity > 0;
                Ok(ProductActionResult::Reserved)
            }
        }
    }

    fn evaluate_query<'a>(_docs: impl Iterator<Item = &'a Self>, _query: ()) {}
}
