//! HTTP/JSON surface of the market.
//!
//! Handlers only hold cloned actor clients ([`AppState`]); every read and
//! write goes through the owning actor.

pub mod error;
pub mod extract;
pub mod orders;
pub mod produce;
pub mod response;
pub mod validation;
pub mod vendors;

pub use error::{ApiError, ApiResult};
pub use response::ApiResponse;

use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::clients::{OrderClient, ProduceClient, VendorClient};

/// Shared handler state: one client per actor.
#[derive(Clone)]
pub struct AppState {
    pub vendors: VendorClient,
    pub produce: ProduceClient,
    pub orders: OrderClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/vendors", get(vendors::list).post(vendors::create))
        .route(
            "/vendors/{id}",
            get(vendors::get_by_id)
                .patch(vendors::update)
                .delete(vendors::delete),
        )
        .route("/produce", get(produce::list).post(produce::create))
        .route(
            "/produce/{id}",
            get(produce::get_by_id)
                .patch(produce::update)
                .delete(produce::delete),
        )
        .route("/orders", get(orders::list).post(orders::create))
        .route("/orders/{id}", get(orders::get_by_id))
        .route("/orders/{id}/status", patch(orders::update_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
