pub mod brands;
pub mod products;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::AppState;

pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "catalog-service",
            "products": state.catalog.product_count(),
            "brands": state.catalog.brand_count(),
        })),
    )
}
