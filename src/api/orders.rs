//! Order API Handlers

use actor_framework::ActorClient;
use axum::{extract::State, http::StatusCode, Json};

use super::error::ApiResult;
use super::extract::{AppJson, AppPath};
use super::response::ApiResponse;
use super::validation::validate_order_create;
use super::AppState;
use crate::model::{Order, OrderCreate, OrderId, OrderStatusUpdate};
use crate::order_actor::OrderError;

async fn fetch(state: &AppState, id: OrderId) -> ApiResult<Order> {
    let order = state
        .orders
        .get(id)
        .await?
        .ok_or_else(|| OrderError::NotFound(id.to_string()))?;
    Ok(order)
}

/// POST /orders
///
/// Reserves stock on the produce item; `produce_name` and `total_price` come
/// from the item, never from the request.
pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<OrderCreate>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Order>>)> {
    validate_order_create(&payload)?;
    let id = state.orders.place_order(payload).await?;
    let order = fetch(&state, id).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success(order, "Order placed successfully"),
    ))
}

/// GET /orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> ApiResult<Json<ApiResponse<Order>>> {
    let order = fetch(&state, OrderId(id)).await?;
    Ok(ApiResponse::success(order, "Order retrieved successfully"))
}

/// GET /orders
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Order>>>> {
    let orders = state.orders.list().await?;
    Ok(ApiResponse::success(orders, "Orders retrieved successfully"))
}

/// PATCH /orders/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
    AppJson(payload): AppJson<OrderStatusUpdate>,
) -> ApiResult<Json<ApiResponse<Order>>> {
    let order = state
        .orders
        .advance_status(OrderId(id), payload.status)
        .await?;
    Ok(ApiResponse::success(order, "Order status updated successfully"))
}
