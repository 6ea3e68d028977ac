mod order;

pub use self::order::{DynOrderStore, OrderStoreTrait};
