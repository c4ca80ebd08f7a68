use ride_server::cache::{CacheConfig, CachedDirectionsClient};
use ride_server::catalog::Catalog;
use ride_server::config::ServerConfig;
use ride_server::directions::{DirectionsClient, DirectionsConfig};
use ride_server::recommend::{RecommendConfig, RecommendationGenerator};
use ride_server::web::{AppState, create_router};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let catalog = Catalog::builtin()?;
    info!(
        ride_options = catalog.ride_options.len(),
        bookings = catalog.bookings.len(),
        "catalog loaded"
    );

    let recommend_config = RecommendConfig::default();
    let generator = match config.rng_seed {
        Some(seed) => {
            info!(seed, "seeding recommendation generator");
            RecommendationGenerator::seeded(seed, recommend_config)
        }
        None => RecommendationGenerator::from_entropy(recommend_config),
    };

    // Route information is optional; a bad key only disables it.
    let directions = match &config.maptiler_api_key {
        Some(key) => match DirectionsClient::new(DirectionsConfig::new(key)) {
            Ok(client) => Some(CachedDirectionsClient::new(client, &CacheConfig::default())),
            Err(e) => {
                warn!(error = %e, "directions client unavailable");
                None
            }
        },
        None => None,
    };

    let state = AppState::new(catalog, generator, directions);
    let app = create_router(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!("RideAggregator listening on http://{}", config.bind_addr);
    info!("  GET  /health                 - Health check");
    info!("  GET  /results                - Ride results (HTML or JSON)");
    info!("  GET  /api/recommendations    - Generated recommendations");
    info!("  GET  /bookings               - Bookings by tab");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!(error = %e, "failed to install signal handler");
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
}
