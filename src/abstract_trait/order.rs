use crate::{
    domain::requests::order::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
    errors::StoreError,
    model::Order,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderStore = Arc<dyn OrderStoreTrait + Send + Sync>;

/// Keyed order collection with monotonic ID allocation. Mutations are
/// serialized with respect to each other and to reads; callers never
/// observe a half-written record.
#[async_trait]
pub trait OrderStoreTrait {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, StoreError>;
    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<Order>, StoreError>;
    async fn find_by_id(&self, id: u64) -> Result<Order, StoreError>;
    async fn update_order(&self, id: u64, req: &UpdateOrderRequest) -> Result<Order, StoreError>;
    async fn delete_order(&self, id: u64) -> Result<(), StoreError>;
}
