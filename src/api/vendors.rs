//! Vendor API Handlers

use actor_framework::ActorClient;
use axum::{extract::State, http::StatusCode, Json};

use super::error::ApiResult;
use super::extract::{AppJson, AppPath};
use super::response::ApiResponse;
use super::validation::{validate_vendor_create, validate_vendor_update};
use super::AppState;
use crate::model::{Vendor, VendorCreate, VendorId, VendorUpdate};
use crate::vendor_actor::VendorError;

async fn fetch(state: &AppState, id: VendorId) -> ApiResult<Vendor> {
    let vendor = state
        .vendors
        .get(id)
        .await?
        .ok_or_else(|| VendorError::NotFound(id.to_string()))?;
    Ok(vendor)
}

/// POST /vendors
pub async fn create(
    State(state): State<AppState>,
    AppJson(payload): AppJson<VendorCreate>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Vendor>>)> {
    validate_vendor_create(&payload)?;
    let id = state.vendors.create_vendor(payload).await?;
    let vendor = fetch(&state, id).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success(vendor, "Vendor created successfully"),
    ))
}

/// GET /vendors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> ApiResult<Json<ApiResponse<Vendor>>> {
    let vendor = fetch(&state, VendorId(id)).await?;
    Ok(ApiResponse::success(vendor, "Vendor retrieved successfully"))
}

/// GET /vendors
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Vendor>>>> {
    let vendors = state.vendors.list().await?;
    Ok(ApiResponse::success(vendors, "Vendors retrieved successfully"))
}

/// PATCH /vendors/{id}
pub async fn update(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
    AppJson(payload): AppJson<VendorUpdate>,
) -> ApiResult<Json<ApiResponse<Vendor>>> {
    validate_vendor_update(&payload)?;
    let vendor = state.vendors.update_vendor(VendorId(id), payload).await?;
    Ok(ApiResponse::success(vendor, "Vendor updated successfully"))
}

/// DELETE /vendors/{id}
pub async fn delete(
    State(state): State<AppState>,
    AppPath(id): AppPath<u32>,
) -> ApiResult<Json<ApiResponse<()>>> {
    state.vendors.delete(VendorId(id)).await?;
    Ok(ApiResponse::message("Vendor deleted successfully"))
}
