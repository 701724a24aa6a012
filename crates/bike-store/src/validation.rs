//! Payload format rules.
//!
//! These checks run at the API boundary before a request reaches any
//! collection actor, and again inside the document constructors so the store
//! cannot hold a malformed record regardless of how it was reached. The
//! functions return plain message strings; callers wrap them in their own
//! `Validation` error variant.

use crate::model::{OrderCreate, ProductCreate, ProductUpdate};

/// Maximum length of a product description.
pub const MAX_DESCRIPTION_LEN: usize = 150;

/// Inclusive bounds on the quantity of a single order.
pub const MIN_ORDER_QUANTITY: u32 = 1;
pub const MAX_ORDER_QUANTITY: u32 = 5;

/// Product names must start with an uppercase letter.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("name is required".to_string());
    }
    let starts_upper = name.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return Err(format!("{name} is not in capitalized format"));
    }
    Ok(())
}

pub fn validate_brand(brand: &str) -> Result<(), String> {
    if brand.is_empty() {
        return Err("brand is required".to_string());
    }
    Ok(())
}

pub fn validate_price(price: f64) -> Result<(), String> {
    if !price.is_finite() || price < 0.0 {
        return Err("price must be a non-negative number".to_string());
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), String> {
    if description.is_empty() {
        return Err("description is required".to_string());
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(format!(
            "description cannot exceed {MAX_DESCRIPTION_LEN} characters"
        ));
    }
    Ok(())
}

/// Minimal structural email check: one `@`, non-empty local part, and a
/// domain with an interior dot.
pub fn validate_email(email: &str) -> Result<(), String> {
    let invalid = || format!("{email} is not a valid email address");
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid());
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid());
    }
    Ok(())
}

pub fn validate_order_quantity(quantity: u32) -> Result<(), String> {
    if quantity < MIN_ORDER_QUANTITY {
        return Err(format!("quantity must be at least {MIN_ORDER_QUANTITY}"));
    }
    if quantity > MAX_ORDER_QUANTITY {
        return Err(format!("quantity cannot exceed {MAX_ORDER_QUANTITY}"));
    }
    Ok(())
}

pub fn validate_total_price(total_price: f64) -> Result<(), String> {
    if !total_price.is_finite() || total_price < 0.0 {
        return Err("total price must be a non-negative number".to_string());
    }
    Ok(())
}

/// Validate a full product creation payload.
pub fn validate_product_create(params: &ProductCreate) -> Result<(), String> {
    validate_name(&params.name)?;
    validate_brand(&params.brand)?;
    validate_price(params.price)?;
    validate_description(&params.description)?;
    Ok(())
}

/// Validate the supplied fields of a partial product update.
pub fn validate_product_update(update: &ProductUpdate) -> Result<(), String> {
    if let Some(name) = &update.name {
        validate_name(name)?;
    }
    if let Some(brand) = &update.brand {
        validate_brand(brand)?;
    }
    if let Some(price) = update.price {
        validate_price(price)?;
    }
    if let Some(description) = &update.description {
        validate_description(description)?;
    }
    Ok(())
}

/// Validate a full order placement payload.
pub fn validate_order_create(params: &OrderCreate) -> Result<(), String> {
    validate_email(&params.email)?;
    validate_order_quantity(params.quantity)?;
    validate_total_price(params.total_price)?;
    Ok(())
}
