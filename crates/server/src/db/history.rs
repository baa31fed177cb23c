use chess_core::{GameSnapshot, MoveList};
use chrono::NaiveDateTime;
use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::error::AppError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub fen: String,
    pub move_list: Json<MoveList>,
    pub player_color: String,
    pub difficulty: String,
    pub time_control: Option<i64>,
    pub result: String,
    pub timestamp: NaiveDateTime,
}

impl HistoryEntry {
    pub fn moves(&self) -> &MoveList {
        &self.move_list.0
    }
}

/// Record a finished game. Nothing links it to a saved game it may have
/// been resumed from.
pub async fn insert(pool: &SqlitePool, game: &GameSnapshot, result: &str) -> Result<i64, AppError> {
    let id = sqlx::query(
        r#"INSERT INTO game_history (fen, move_list, player_color, difficulty, time_control, result)
           VALUES (?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&game.fen)
    .bind(Json(&game.moves))
    .bind(&game.player_color)
    .bind(&game.difficulty)
    .bind(game.time_control)
    .bind(result)
    .execute(pool)
    .await
    .map_err(AppError::Sqlx)?
    .last_insert_rowid();

    tracing::debug!(history_id = id, result, "Recorded finished game");
    Ok(id)
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<HistoryEntry>, AppError> {
    let rows = sqlx::query_as::<_, HistoryEntry>(
        r#"SELECT id, fen, move_list, player_color, difficulty, time_control, result, timestamp
           FROM game_history
           ORDER BY timestamp DESC, id DESC"#,
    )
    .fetch_all(pool)
    .await
    .map_err(AppError::Sqlx)?;

    Ok(rows)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, AppError> {
    let removed = sqlx::query("DELETE FROM game_history WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .map_err(AppError::Sqlx)?
        .rows_affected();

    Ok(removed)
}
