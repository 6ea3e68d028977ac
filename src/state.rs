use crate::{abstract_trait::DynOrderStore, repository::InMemoryOrderStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub order_store: DynOrderStore,
}

impl AppState {
    /// Builds the store once, with an empty map and the ID counter at 1,
    /// before any request is served.
    pub fn new() -> Self {
        let order_store = Arc::new(InMemoryOrderStore::new()) as DynOrderStore;

        Self { order_store }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
