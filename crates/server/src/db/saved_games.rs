use chess_core::{GameSnapshot, MoveList};
use chrono::NaiveDateTime;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::error::AppError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SavedGame {
    pub id: i64,
    pub fen: String,
    pub move_list: Json<MoveList>,
    pub player_color: String,
    pub difficulty: String,
    pub time_control: Option<i64>,
    pub timestamp: NaiveDateTime,
}

impl SavedGame {
    pub fn moves(&self) -> &MoveList {
        &self.move_list.0
    }
}

/// Store a new snapshot. Returns the id assigned by the store.
pub async fn insert(pool: &SqlitePool, game: &GameSnapshot) -> Result<i64, AppError> {
    let id = sqlx::query(
        r#"INSERT INTO saved_games (fen, move_list, player_color, difficulty, time_control)
           VALUES (?, ?, ?, ?, ?)"#,
    )
    .bind(&game.fen)
    .bind(Json(&game.moves))
    .bind(&game.player_color)
    .bind(&game.difficulty)
    .bind(game.time_control)
    .execute(pool)
    .await
    .map_err(AppError::Sqlx)?
    .last_insert_rowid();

    tracing::debug!(game_id = id, moves = game.moves.len(), "Saved game");
    Ok(id)
}

/// Every saved game, most recent first.
pub async fn list(pool: &SqlitePool) -> Result<Vec<SavedGame>, AppError> {
    let rows = sqlx::query_as::<_, SavedGame>(
        r#"SELECT id, fen, move_list, player_color, difficulty, time_control, timestamp
           FROM saved_games
           ORDER BY timestamp DESC, id DESC"#,
    )
    .fetch_all(pool)
    .await
    .map_err(AppError::Sqlx)?;

    Ok(rows)
}

pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<SavedGame>, AppError> {
    let row = sqlx::query_as::<_, SavedGame>(
        r#"SELECT id, fen, move_list, player_color, difficulty, time_control, timestamp
           FROM saved_games
           WHERE id = ?"#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::Sqlx)?;

    Ok(row)
}

/// Returns how many rows were removed (0 or 1).
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let removed = sqlx::query("DELETE FROM saved_games WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(AppError::Sqlx)?
        .rows_affected();

    Ok(removed)
}
