use std::net::SocketAddr;
use std::sync::Arc;

use plantpulse_api::config::ServerConfig;
use plantpulse_api::router::build_app_router;
use plantpulse_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = config.port, "Configuration loaded");

    let pool = connect_database().await;

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    let ip = config.host.parse().expect("HOST is not a valid IP address");
    let addr = SocketAddr::new(ip, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot bind {addr}: {e}"));
    tracing::info!(%addr, "PlantPulse API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server task failed");

    tracing::info!("Shutdown complete");
}

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "plantpulse_api=debug,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect the pool, verify the database answers, and apply any pending
/// migrations. Startup aborts on any failure here.
async fn connect_database() -> plantpulse_db::DbPool {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = plantpulse_db::create_pool(&database_url)
        .await
        .expect("Failed to create database pool");

    plantpulse_db::health_check(&pool)
        .await
        .expect("Database did not answer health check");

    plantpulse_db::run_migrations(&pool)
        .await
        .expect("Migration run failed");

    tracing::info!("Database pool ready, migrations applied");
    pool
}

/// Resolve when the process should stop: SIGINT (Ctrl-C) anywhere, SIGTERM
/// additionally on Unix for process managers.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
        "SIGINT"
    };

    #[cfg(unix)]
    let sigterm = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
        "SIGTERM"
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<&'static str>();

    let signal = tokio::select! {
        s = ctrl_c => s,
        s = sigterm => s,
    };

    tracing::info!(signal, "Shutdown signal received, draining in-flight requests");
}
