use crate::model::OrderItem;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct OrderItemRequest {
    #[validate(length(min = 1, message = "Item name must not be empty"))]
    pub name: String,

    #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
    pub quantity: i32,

    #[validate(range(exclusive_min = 0.0, message = "Price must be greater than zero"))]
    pub price: f64,
}

impl From<OrderItemRequest> for OrderItem {
    fn from(value: OrderItemRequest) -> Self {
        OrderItem {
            name: value.name,
            quantity: value.quantity,
            price: value.price,
        }
    }
}
