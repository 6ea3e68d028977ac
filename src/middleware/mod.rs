mod validate;

pub use self::validate::{ValidatedJson, format_validation_errors};
