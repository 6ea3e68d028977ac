use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

/// JSON extractor that deserializes the body and runs `validator` checks
/// before the handler sees it. Constraint violations are rejected with 422
/// and an `{"error": "..."}` body; nothing invalid reaches the store.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    let payload = json!({
                        "error": rejection.body_text(),
                    });
                    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload))
                })?;

        json_value.validate().map_err(|validation_errors| {
            let payload = json!({
                "error": format_validation_errors(&validation_errors),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload))
        })?;

        Ok(Self(json_value))
    }
}

/// Flatten a `ValidationErrors` tree into one `field: reason` message per
/// violation, joined with `; `. Nested list entries keep their path, e.g.
/// `items[0].price: Price must be greater than zero`.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut error_messages = Vec::new();
    collect_messages(errors, "", &mut error_messages);

    if error_messages.is_empty() {
        "Validation failed".to_string()
    } else {
        error_messages.join("; ")
    }
}

fn collect_messages(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    use validator::ValidationErrorsKind;

    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| match error.code.as_ref() {
                            "length" => "Invalid length".to_string(),
                            "range" => "Value out of range".to_string(),
                            _ => format!("Invalid {path}"),
                        });
                    out.push(format!("{path}: {message}"));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect_messages(nested, &path, out);
            }
            ValidationErrorsKind::List(entries) => {
                for (index, nested) in entries {
                    collect_messages(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}
