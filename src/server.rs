use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    metrics,
    signals::setup_signal_handlers,
};

/// Start the pricing server
///
/// This function:
/// 1. Initializes metrics
/// 2. Builds the calculator and sets up signal handlers for shutdown and policy reload
/// 3. Binds to the configured address
/// 4. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    info!("Initializing Prometheus metrics...");
    let metrics_handle = Arc::new(metrics::init_metrics()?);

    let app_state = AppState::new(config.build_calculator()?);

    // SIGTERM, SIGINT for shutdown; SIGHUP for reload
    let (shutdown_tx, signal_handle) =
        setup_signal_handlers(app_state.calculator.clone(), config_path);
    let mut shutdown_rx = shutdown_tx.subscribe();

    let app = create_router(app_state, metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting storefront pricing on {}", addr);
    info!(
        "Pricing: tax rate {}, free delivery from {}, service charge {}, {} zone overrides",
        config.pricing.tax_rate,
        config.pricing.free_delivery_threshold,
        config.pricing.service_charge,
        config.regions.zone_overrides.len()
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
pub fn create_router(app_state: AppState, metrics_handle: Arc<PrometheusHandle>) -> Router {
    let api_routes = Router::new()
        .route("/api/pricing/summary", post(handlers::pricing::order_summary))
        .route(
            "/api/pricing/preview/:region",
            get(handlers::pricing::delivery_preview),
        )
        .route("/api/pricing/policy", get(handlers::pricing::current_policy))
        .route("/api/regions", get(handlers::regions::list_regions))
        .route(
            "/api/regions/:code/cities",
            get(handlers::regions::list_cities),
        )
        .route("/api/checkout/quote", post(handlers::checkout::quote))
        .route("/api/checkout/validate", post(handlers::checkout::validate))
        .route("/api/catalog/search", post(handlers::catalog::search))
        .with_state(app_state);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .route("/metrics", get(handlers::metrics_handler::metrics))
        .with_state(metrics_handle)
        .merge(api_routes)
        // Catalog searches carry the product list in the body
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
