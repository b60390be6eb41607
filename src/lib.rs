use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use crate::catalog::Catalog;

/// Shared application state — cheap to clone (catalog behind Arc).
///
/// The catalog is fully loaded before it is wrapped here and is never
/// mutated afterwards, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Brands ──────────────────────────────────────────────────────────
        .route("/v1/brands", get(handlers::brands::list_brands))
        .route(
            "/v1/brands/:brand",
            get(handlers::brands::list_products_by_brand),
        )

        // ── Products ────────────────────────────────────────────────────────
        .route("/v1/products", get(handlers::products::list_products))
        .route("/v1/products/:id", get(handlers::products::get_product))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
