//! Request handlers. Each one unwraps the request, calls into the catalog or
//! the order service and wraps the result in an envelope.

use super::error::ApiError;
use super::response::{Health, Success};
use super::AppState;
use crate::model::{CreateOrderRequest, Order, OrderPatch, Product};
use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

/// `GET /health`
pub async fn health() -> Json<Health> {
    Json(Health::default())
}

/// `GET /api/menu`
pub async fn get_menu(State(state): State<AppState>) -> Json<Success<Vec<Product>>> {
    Json(Success::new(state.catalog.list_products().to_vec()))
}

/// `POST /api/order`
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Success<Order>>), ApiError> {
    let Json(request) = body?;
    let order = state
        .orders
        .create_order(request)
        .await
        .map_err(|e| ApiError::from_order(e, state.environment))?;
    Ok((StatusCode::CREATED, Json(Success::new(order))))
}

/// `GET /api/order/{order_id}`
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
) -> Result<Json<Success<Order>>, ApiError> {
    let order = state
        .orders
        .get_order(&order_id)
        .await
        .map_err(|e| ApiError::from_order(e, state.environment))?;
    Ok(Json(Success::new(order)))
}

/// `PATCH /api/order/{order_id}`
///
/// The body may only carry `priority` and `status`; anything else is a 400.
pub async fn update_order(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    body: Result<Json<OrderPatch>, JsonRejection>,
) -> Result<Json<Success<Order>>, ApiError> {
    let Json(patch) = body?;
    let order = state
        .orders
        .update_order(&order_id, patch)
        .await
        .map_err(|e| ApiError::from_order(e, state.environment))?;
    Ok(Json(Success::new(order)))
}

/// Fallback for every unrouted request.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    debug!(%uri, "No route");
    ApiError::not_found(format!("Route {uri} not found"))
}
