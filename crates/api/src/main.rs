use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sidewalk_api::config::ServerConfig;
use sidewalk_api::router::build_app_router;
use sidewalk_api::state::AppState;
use sidewalk_db::store::PgHazardStore;
use sidewalk_maps::GoogleMapsClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env().context("Invalid server configuration")?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        hazard_tolerance_deg = config.hazard_tolerance_deg,
        maps_base_url = %config.maps.base_url,
        "Loaded server configuration",
    );

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = sidewalk_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    sidewalk_db::health_check(&pool)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    sidewalk_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    // --- Maps provider ---
    let maps = GoogleMapsClient::new(&config.maps).context("Failed to build maps client")?;

    // --- App state ---
    let state = AppState {
        store: Arc::new(PgHazardStore::new(pool.clone())),
        maps: Arc::new(maps),
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let ip = config
        .host
        .parse()
        .with_context(|| format!("Invalid HOST address '{}'", config.host))?;
    let addr = SocketAddr::new(ip, config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    pool.close().await;
    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` controls filtering;
/// `LOG_FORMAT=json` switches to one JSON object per line.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sidewalk_api=debug,sidewalk_maps=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();
}

/// Wait for SIGINT or SIGTERM to initiate graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
