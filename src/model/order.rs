use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single line item. Carries no identity of its own; it is owned by
/// its parent order and copied by value.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct OrderItem {
    #[validate(length(min = 1, message = "Item name must not be empty"))]
    pub name: String,

    #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
    pub quantity: i32,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    pub price: f64,
}

/// Stored order record. The validation attributes are re-checked on every
/// merged update, so a record in the store always has a non-empty customer
/// and at least one item.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct Order {
    pub id: u64,

    #[validate(length(min = 1, message = "Customer must not be empty"))]
    pub customer: String,

    #[validate(
        length(min = 1, message = "Order must include at least one item"),
        nested
    )]
    pub items: Vec<OrderItem>,
}
