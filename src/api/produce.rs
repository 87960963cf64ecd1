//! Produce API Handlers

use actor_framework::ActorClient;
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::collections::BTreeMap;

use super::error::ApiResult;
use super::extract::{AppJson, AppPath, AppQuery};
use super::response::ApiResponse;
use super::validation::{validate_produce_create, validate_produce_update};
use super::AppState;
use crate::model::{Produce, ProduceCreate, ProduceId, ProduceUpdate, VendorId};
use crate::produce_actor::ProduceError;

#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub vendor_id: u32,
}

async fn fetch(state: &AppState, id: ProduceId) -> ApiResult<Produce> {
    let produce = state
        .produce
        .get(id)
        .await?
        .ok_or_else(|| ProduceError::NotFound(id.to_string()))?;
    Ok(produce)
}

/// POST /produce?vendor_id={vendor_id}
///
/// Fields are validated before the vendor is looked up.
pub async fn create(
    State(state): State<AppState>,
    AppQuery(owner): AppQuery<OwnerQuery>,
    AppJson(payload): AppJson<ProduceCreate>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Produce>>)> {
    validate_produce_create(&payload)?;
    let id = state
        .produce
        .add_produce(VendorId(owner.vendor_id), payload)
        .await?;
    let produce = fetch(&state, id).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success(produce, "Produce created successfully"),
    ))
}

/// GET /produce/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> ApiResult<Json<ApiResponse<Produce>>> {
    let produce = fetch(&state, ProduceId(id)).await?;
    Ok(ApiResponse::success(produce, "Produce retrieved successfully"))
}

/// GET /produce, grouped by vendor id
pub async fn list(
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<BTreeMap<VendorId, Vec<Produce>>>>> {
    let grouped = state.produce.list_grouped().await?;
    Ok(ApiResponse::success(grouped, "Produce retrieved successfully"))
}

/// PATCH /produce/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
    AppJson(payload): AppJson<ProduceUpdate>,
) -> ApiResult<Json<ApiResponse<Produce>>> {
    validate_produce_update(&payload)?;
    let produce = state.produce.update_produce(ProduceId(id), payload).await?;
    Ok(ApiResponse::success(produce, "Produce updated successfully"))
}

/// DELETE /produce/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state.produce.delete(ProduceId(id)).await?;
    Ok(ApiResponse::message("Produce deleted successfully"))
}
