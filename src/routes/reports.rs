use axum::{extract::State, response::Json};
use sqlx::postgres::PgPool;

use crate::db;
use crate::error::ApiError;
use crate::models::{GenrePopularity, PlayerName, PlayerScore, TopPlayer};

// GET /players-scores - Every player/game/score triple
pub async fn get_players_scores(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<PlayerScore>>, ApiError> {
    Ok(Json(db::get_players_scores(&pool).await?))
}

// GET /top-players - Three highest total scores
pub async fn get_top_players(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<TopPlayer>>, ApiError> {
    Ok(Json(db::get_top_players(&pool).await?))
}

// GET /inactive-players - Players with no scores
pub async fn get_inactive_players(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<PlayerName>>, ApiError> {
    Ok(Json(db::get_inactive_players(&pool).await?))
}

// GET /popular-genres - Scored plays per genre, most played first
pub async fn get_popular_genres(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<GenrePopularity>>, ApiError> {
    Ok(Json(db::get_popular_genres(&pool).await?))
}

// GET /recent-players - Players who joined in the last 30 days
pub async fn get_recent_players(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<PlayerName>>, ApiError> {
    Ok(Json(db::get_recent_players(&pool).await?))
}
