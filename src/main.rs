use std::net::{Ipv4Addr, SocketAddr};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod config;
mod db;
mod error;
mod models;
mod routes;

use config::DbConfig;
use error::StartupError;

const PORT: u16 = 3000;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    // .env first, so RUST_LOG from it reaches the filter.
    dotenvy::dotenv().ok();

    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(log_filter(std::env::var("RUST_LOG").ok()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting api server...");

    let config = DbConfig::from_env().inspect_err(|e| tracing::error!("{}", e))?;
    let pool = db::create_pool(&config);

    // An unreachable database is logged, not fatal; requests will report it.
    let check_pool = pool.clone();
    tokio::spawn(async move {
        match db::ping(&check_pool).await {
            Ok(()) => tracing::info!(
                host = %config.host,
                database = %config.database,
                "Database connection established."
            ),
            Err(e) => tracing::error!("Failed to connect to database: {}", e),
        }
    });

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));
    let app = routes::app(pool.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// `RUST_LOG` directives, or `info` when unset or unparsable.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, starting shutdown"),
        _ = terminate => tracing::info!("Received SIGTERM, starting shutdown"),
    }
}
