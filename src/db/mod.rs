use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::DbConfig;
use crate::models::*;

/// Builds the shared pool without opening a connection, so the server can
/// start while the database is still unreachable.
pub fn create_pool(config: &DbConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options())
}

/// Round-trips `SELECT 1` through the pool.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

// Report queries. Score columns are cast to bigint so any integer or
// numeric `scores.score` column decodes the same way.
pub async fn get_players_scores(pool: &PgPool) -> Result<Vec<PlayerScore>, sqlx::Error> {
    sqlx::query_as::<_, PlayerScore>(
        r#"SELECT players.name AS player_name, games.title AS game_title, scores.score::bigint AS score
           FROM players
           JOIN scores ON players.id = scores.player_id
           JOIN games ON scores.game_id = games.id"#
    )
    .fetch_all(pool)
    .await
}

/// Top three players by summed score. Ties keep whatever order Postgres returns.
pub async fn get_top_players(pool: &PgPool) -> Result<Vec<TopPlayer>, sqlx::Error> {
    sqlx::query_as::<_, TopPlayer>(
        r#"SELECT players.name AS player_name, SUM(scores.score)::bigint AS total_score
           FROM players
           JOIN scores ON players.id = scores.player_id
           GROUP BY players.id
           ORDER BY total_score DESC
           LIMIT 3"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_inactive_players(pool: &PgPool) -> Result<Vec<PlayerName>, sqlx::Error> {
    sqlx::query_as::<_, PlayerName>(
        r#"SELECT players.name
           FROM players
           LEFT JOIN scores ON players.id = scores.player_id
           WHERE scores.player_id IS NULL"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_popular_genres(pool: &PgPool) -> Result<Vec<GenrePopularity>, sqlx::Error> {
    sqlx::query_as::<_, GenrePopularity>(
        r#"SELECT games.genre, COUNT(*) AS play_count
           FROM games
           JOIN scores ON games.id = scores.game_id
           GROUP BY games.genre
           ORDER BY play_count DESC"#
    )
    .fetch_all(pool)
    .await
}

/// Players who joined in the last 30 days, in no particular order.
pub async fn get_recent_players(pool: &PgPool) -> Result<Vec<PlayerName>, sqlx::Error> {
    sqlx::query_as::<_, PlayerName>(
        r#"SELECT name
           FROM players
           WHERE join_date > NOW() - INTERVAL '30 days'"#
    )
    .fetch_all(pool)
    .await
}
