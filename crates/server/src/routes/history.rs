use axum::{extract::Path, Extension, Json};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use sqlx::SqlitePool;

use crate::db::history::{self, HistoryEntry};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::routes::GameFields;

#[derive(Debug, Deserialize)]
pub struct AddToHistoryRequest {
    #[serde(flatten)]
    pub game: GameFields,
    pub result: String,
}

fn history_entry_to_json(h: &HistoryEntry) -> JsonValue {
    serde_json::json!({
        "id": h.id,
        "fen": h.fen,
        "move_list": h.moves().to_delimited(),
        "player_color": h.player_color,
        "difficulty": h.difficulty,
        "timeControl": h.time_control,
        "result": h.result,
        "timestamp": h.timestamp,
    })
}

/// POST /add_to_history
pub async fn add_to_history(
    Extension(pool): Extension<SqlitePool>,
    AppJson(req): AppJson<AddToHistoryRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let game = req.game.into_snapshot();
    game.validate()?;
    chess_core::validate_label("result", &req.result)?;

    let history_id = history::insert(&pool, &game, &req.result).await?;
    tracing::info!(history_id, result = %req.result, "Game added to history");

    Ok(Json(serde_json::json!({ "status": "success" })))
}

/// GET /get_game_history
pub async fn get_game_history(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<JsonValue>, AppError> {
    let entries = history::list(&pool).await?;

    Ok(Json(serde_json::json!({
        "game_history": entries.iter().map(history_entry_to_json).collect::<Vec<_>>(),
    })))
}

/// DELETE /delete_history_item/{history_id}
pub async fn delete_history_item(
    Extension(pool): Extension<SqlitePool>,
    Path(history_id): Path<i64>,
) -> Result<Json<JsonValue>, AppError> {
    let removed = history::delete(&pool, history_id).await?;
    tracing::info!(history_id, removed, "History item delete");

    Ok(Json(serde_json::json!({ "status": "success" })))
}
