use crate::model::OrderItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItemResponse {
    pub name: String,
    pub quantity: i32,
    pub price: f64,
}

// model to response
impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            name: value.name,
            quantity: value.quantity,
            price: value.price,
        }
    }
}
