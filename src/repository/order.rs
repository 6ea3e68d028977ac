use crate::{
    abstract_trait::OrderStoreTrait,
    domain::requests::order::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
    errors::StoreError,
    model::Order,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Mutex;
use tracing::{error, info};
use validator::Validate;

/// In-memory order store. One mutex guards both the map and the ID
/// counter and is held for the whole of each operation, so ID allocation
/// and mutations are serialized and reads always see committed records.
/// No await happens while the lock is held.
pub struct InMemoryOrderStore {
    inner: Mutex<OrderTable>,
}

struct OrderTable {
    // BTreeMap keyed by the monotonic ID keeps iteration in insertion order.
    orders: BTreeMap<u64, Order>,
    next_id: u64,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(OrderTable {
                orders: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, OrderTable> {
        // A poisoned lock means a panic mid-mutation; the store contents
        // can no longer be trusted.
        self.inner.lock().expect("order store mutex poisoned")
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStoreTrait for InMemoryOrderStore {
    async fn create_order(&self, req: &CreateOrderRequest) -> Result<Order, StoreError> {
        let mut table = self.lock();

        let id = table.next_id;
        table.next_id += 1;

        let order = Order {
            id,
            customer: req.customer.clone(),
            items: req.items.iter().cloned().map(Into::into).collect(),
        };

        table.orders.insert(id, order.clone());

        info!("✅ Created order ID {} for customer {}", id, order.customer);
        Ok(order)
    }

    async fn find_all(&self, req: &FindAllOrders) -> Result<Vec<Order>, StoreError> {
        let table = self.lock();

        let filter = req
            .customer
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase);

        let orders = table
            .orders
            .values()
            .filter(|order| match &filter {
                Some(needle) => order.customer.to_lowercase().contains(needle),
                None => true,
            })
            .skip(req.skip as usize)
            .take(req.limit as usize)
            .cloned()
            .collect();

        Ok(orders)
    }

    async fn find_by_id(&self, id: u64) -> Result<Order, StoreError> {
        let table = self.lock();

        table.orders.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn update_order(&self, id: u64, req: &UpdateOrderRequest) -> Result<Order, StoreError> {
        // Read, merge, re-validate and replace under one lock acquisition
        // so concurrent updates cannot interleave their merges.
        let mut table = self.lock();

        let stored = table.orders.get(&id).ok_or(StoreError::NotFound)?;

        let mut merged = stored.clone();
        if let Some(customer) = &req.customer {
            merged.customer = customer.clone();
        }
        if let Some(items) = &req.items {
            merged.items = items.iter().cloned().map(Into::into).collect();
        }

        merged.validate().map_err(|err| {
            error!("❌ Rejected update for order ID {}: {:?}", id, err);
            StoreError::Validation(err)
        })?;

        table.orders.insert(id, merged.clone());

        info!("🔄 Updated order ID {}", id);
        Ok(merged)
    }

    async fn delete_order(&self, id: u64) -> Result<(), StoreError> {
        let mut table = self.lock();

        table.orders.remove(&id).ok_or(StoreError::NotFound)?;

        info!("🗑️ Deleted order ID {}", id);
        Ok(())
    }
}
