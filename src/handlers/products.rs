use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    AppState,
};

// ── GET /v1/products ──────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Response {
    let products = state.catalog.all_products();

    info!(count = products.len(), "Listed products");

    (StatusCode::OK, Json(products)).into_response()
}

// ── GET /v1/products/:id ──────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let product = state
        .catalog
        .product_by_id(&id)
        .ok_or_else(|| AppError::ProductNotFound(id.clone()))?;

    info!(id = %id, "Fetched product");

    Ok((StatusCode::OK, Json(product)).into_response())
}
