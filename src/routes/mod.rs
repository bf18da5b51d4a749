use axum::{routing::get, Router};
use sqlx::postgres::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod health;
pub mod reports;

pub const WELCOME_MESSAGE: &str = "Welcome to this Node.js PostgreSQL lesson!";

/// Builds the full application router around the shared pool.
pub fn app(pool: PgPool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { WELCOME_MESSAGE }))
        .route("/health", get(health::health_check))

        // Report endpoints
        .route("/players-scores", get(reports::get_players_scores))
        .route("/top-players", get(reports::get_top_players))
        .route("/inactive-players", get(reports::get_inactive_players))
        .route("/popular-genres", get(reports::get_popular_genres))
        .route("/recent-players", get(reports::get_recent_players))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
