use crate::domain::requests::order_item::OrderItemRequest;
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_limit() -> u64 {
    10
}

/// Query parameters for the list endpoint. `skip` and `limit` fall back to
/// their defaults when absent; an empty `customer` string means no filter.
#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct FindAllOrders {
    #[serde(default)]
    pub skip: u64,

    #[serde(default = "default_limit")]
    #[validate(range(min = 1, message = "Limit must be greater than zero"))]
    pub limit: u64,

    pub customer: Option<String>,
}

impl Default for FindAllOrders {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
            customer: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Customer must not be empty"))]
    pub customer: String,

    #[validate(
        length(min = 1, message = "Order must include at least one item"),
        nested
    )]
    pub items: Vec<OrderItemRequest>,
}

/// Partial update. A field left out of the payload (or sent as JSON null)
/// keeps the stored value; a field that is present must pass the same
/// constraints as on create.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, Default)]
pub struct UpdateOrderRequest {
    #[validate(length(min = 1, message = "Customer must not be empty"))]
    pub customer: Option<String>,

    #[validate(
        length(min = 1, message = "Order must include at least one item"),
        nested
    )]
    pub items: Option<Vec<OrderItemRequest>>,
}
