use crate::domain::response::order_item::OrderItemResponse;
use crate::model::Order;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderResponse {
    pub id: u64,
    pub customer: String,
    pub items: Vec<OrderItemResponse>,
}

// model to response
impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            customer: value.customer,
            items: value.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeleteOrderResponse {
    pub message: String,
}

impl DeleteOrderResponse {
    pub fn deleted() -> Self {
        DeleteOrderResponse {
            message: "Order deleted".to_string(),
        }
    }
}
