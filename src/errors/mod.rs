mod error;
mod http;
mod store;

pub use self::error::ErrorResponse;
pub use self::http::HttpError;
pub use self::store::StoreError;
