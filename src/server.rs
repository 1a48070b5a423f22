use anyhow::Result;
use arc_swap::ArcSwap;
use axum::{extract::DefaultBodyLimit, routing::{get, post}, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{config::Config, handlers, handlers::AppState, metrics, signals::setup_signal_handlers};

/// Start the quote server
///
/// This function:
/// 1. Initializes metrics (when enabled)
/// 2. Sets up signal handlers for graceful shutdown and rate schedule reload
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    let metrics_handle = if config.metrics.enabled {
        info!("Initializing Prometheus metrics...");
        Some(Arc::new(metrics::init_metrics()?))
    } else {
        None
    };

    // Wrap config in ArcSwap for atomic reload support
    let config_swap = Arc::new(ArcSwap::from_pointee(config.clone()));

    let (shutdown_tx, signal_handle) = setup_signal_handlers(config_swap.clone(), config_path);
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(
        AppState::new(config_swap),
        metrics_handle.map(|handle| (config.metrics.endpoint.clone(), handle)),
    );

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting LTL quote service on {}", addr);
    info!(
        "Rate schedule: hub {}, {} origins, {} destinations, insurance basis {:?}",
        config.rates.hub,
        config.rates.origins.len(),
        config.rates.destinations.len(),
        config.rates.insurance_basis
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
///
/// `metrics` carries the scrape path and handle when metrics are enabled.
pub fn create_router(
    app_state: AppState,
    metrics: Option<(String, Arc<PrometheusHandle>)>,
) -> Router {
    let quote_routes = Router::new()
        .route("/quote", post(handlers::quote::create_quote))
        .route("/routes", get(handlers::routes::list_routes))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(app_state);

    let mut router = Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(quote_routes);

    if let Some((endpoint, handle)) = metrics {
        let metrics_routes = Router::new()
            .route(&endpoint, get(handlers::metrics_handler::metrics))
            .with_state(handle);
        router = router.merge(metrics_routes);
    }

    router
        // Quote bodies are small; cap them at 1 MiB
        .layer(DefaultBodyLimit::max(1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
