use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::AppState;

// ── GET /v1/brands ────────────────────────────────────────────────────────────

pub async fn list_brands(State(state): State<AppState>) -> Response {
    let brands = state.catalog.all_brands();

    info!(count = brands.len(), "Listed brands");

    (StatusCode::OK, Json(brands)).into_response()
}

// ── GET /v1/brands/:brand ─────────────────────────────────────────────────────

pub async fn list_products_by_brand(
    State(state): State<AppState>,
    Path(brand): Path<String>,
) -> Response {
    let products = state.catalog.filter_by_brand(&brand);

    info!(brand = %brand, count = products.len(), "Listed products by brand");

    (StatusCode::OK, Json(products)).into_response()
}
