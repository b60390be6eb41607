use anyhow::Context;
use tracing::{info, warn};

use catalog_service::{build_router, catalog, config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,catalog_service=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    // Both files must load before the listener exists; a failure here aborts startup.
    info!(
        products = %config.products_path.display(),
        brands = %config.brands_path.display(),
        "Loading catalog..."
    );
    let catalog = catalog::load(&config.products_path, &config.brands_path)
        .await
        .context("catalog data could not be loaded")?;

    let duplicates = catalog.duplicate_product_ids();
    if !duplicates.is_empty() {
        warn!(
            ids = ?duplicates,
            "Duplicate product ids in catalog; lookups return the first match"
        );
    }

    let app = build_router(AppState::new(catalog));

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Listening on http://{}", addr);
    info!("Endpoints: GET /v1/brands · /v1/brands/:brand · /v1/products · /v1/products/:id");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
