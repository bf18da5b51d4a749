use serde::{Deserialize, Serialize};

/// One (player, game, score) triple.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, PartialEq)]
pub struct PlayerScore {
    pub player_name: String,
    pub game_title: String,
    pub score: Option<i64>,
}

/// A player with the sum of all their scores.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, PartialEq)]
pub struct TopPlayer {
    pub player_name: String,
    pub total_score: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, PartialEq)]
pub struct PlayerName {
    pub name: String,
}

/// Number of scored plays for one genre.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, PartialEq)]
pub struct GenrePopularity {
    pub genre: Option<String>,
    pub play_count: i64,
}
