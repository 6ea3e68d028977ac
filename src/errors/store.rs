use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Order not found")]
    NotFound,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}
