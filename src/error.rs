use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::warn;

/// Per-request failures surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Product Not Found")]
    ProductNotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ProductNotFound(id) => {
                warn!(id = %id, "Product lookup missed");
                (StatusCode::BAD_REQUEST, "Product Not Found").into_response()
            }
        }
    }
}

/// Failures while loading the catalog data files. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {} as a JSON array of objects", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
