use anyhow::Result;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config, handlers, metrics, signals::shutdown_signal, state::AppState,
    uploads::UPLOADS_ROUTE,
};

/// Room for multipart boundaries and form fields on top of the file itself
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Start the quotation server
///
/// Initializes metrics, builds the application state and serves until
/// SIGTERM/SIGINT, then drains open connections.
pub async fn start_server(config: Config) -> Result<()> {
    info!("Initializing Prometheus metrics...");
    let metrics_handle = Arc::new(metrics::init_metrics()?);

    let state = AppState::from_config(&config, reqwest::Client::new());
    let advisor_available = state.advisor.is_available();

    let app = create_router(state, metrics_handle);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting reno-quote on {}", addr);
    info!(
        "Configuration: AI advisor {}, uploads in '{}' (max {} bytes)",
        if advisor_available { "enabled" } else { "disabled" },
        config.uploads.dir,
        config.uploads.max_file_size
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let signal = shutdown_signal().await;
            info!("{} received, draining connections...", signal);
        })
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(state: AppState, metrics_handle: Arc<PrometheusHandle>) -> Router {
    let body_limit = state.uploads.max_file_size() + MULTIPART_OVERHEAD;
    let uploads = ServeDir::new(state.uploads.dir());

    let api_routes = Router::new()
        .nest("/api/requirements", handlers::requirements::router())
        .nest("/api/pricing", handlers::pricing::router())
        .nest("/api/comparison", handlers::comparison::router())
        .nest("/api/style-test", handlers::style_test::router())
        .nest("/api/floorplan", handlers::floorplan::router())
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(state);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics_handler::metrics))
        .with_state(metrics_handle)
        .merge(api_routes)
        .nest_service(UPLOADS_ROUTE, uploads)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
