use crate::{
    abstract_trait::DynOrderStore,
    domain::{
        requests::order::{CreateOrderRequest, FindAllOrders, UpdateOrderRequest},
        response::order::{DeleteOrderResponse, OrderResponse},
    },
    errors::HttpError,
    middleware::{ValidatedJson, format_validation_errors},
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use validator::Validate;

pub async fn create_order(
    Extension(store): Extension<DynOrderStore>,
    ValidatedJson(body): ValidatedJson<CreateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = store.create_order(&body).await?;
    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}

pub async fn get_orders(
    Extension(store): Extension<DynOrderStore>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, HttpError> {
    params
        .validate()
        .map_err(|errors| HttpError::UnprocessableEntity(format_validation_errors(&errors)))?;

    let orders = store.find_all(&params).await?;
    let response: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(response)))
}

pub async fn get_order(
    Extension(store): Extension<DynOrderStore>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, HttpError> {
    let order = store.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(OrderResponse::from(order))))
}

pub async fn update_order(
    Extension(store): Extension<DynOrderStore>,
    Path(id): Path<u64>,
    ValidatedJson(body): ValidatedJson<UpdateOrderRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let order = store.update_order(id, &body).await?;
    Ok((StatusCode::OK, Json(OrderResponse::from(order))))
}

pub async fn delete_order(
    Extension(store): Extension<DynOrderStore>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, HttpError> {
    store.delete_order(id).await?;
    Ok((StatusCode::OK, Json(DeleteOrderResponse::deleted())))
}

pub fn order_routes(app_state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/orders", post(create_order))
        .route("/orders", get(get_orders))
        .route("/orders/{id}", get(get_order))
        .route("/orders/{id}", put(update_order))
        .route("/orders/{id}", delete(delete_order))
        .layer(Extension(app_state.order_store.clone()))
}
