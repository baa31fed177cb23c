use axum::{extract::Path, Extension, Json};
use serde_json::Value as JsonValue;
use sqlx::SqlitePool;

use crate::db::saved_games::{self, SavedGame};
use crate::error::AppError;
use crate::extract::AppJson;
use crate::routes::GameFields;

/// Listing rows keep the comma-joined `move_list`; the client splits it itself.
fn saved_game_to_json(g: &SavedGame) -> JsonValue {
    serde_json::json!({
        "id": g.id,
        "fen": g.fen,
        "move_list": g.moves().to_delimited(),
        "player_color": g.player_color,
        "difficulty": g.difficulty,
        "timeControl": g.time_control,
        "timestamp": g.timestamp,
    })
}

/// POST /save_game
pub async fn save_game(
    Extension(pool): Extension<SqlitePool>,
    AppJson(req): AppJson<GameFields>,
) -> Result<Json<JsonValue>, AppError> {
    let game = req.into_snapshot();
    game.validate()?;

    let game_id = saved_games::insert(&pool, &game).await?;
    tracing::info!(game_id, "Game saved");

    Ok(Json(serde_json::json!({
        "status": "success",
        "game_id": game_id,
    })))
}

/// GET /get_saved_games
pub async fn get_saved_games(
    Extension(pool): Extension<SqlitePool>,
) -> Result<Json<JsonValue>, AppError> {
    let games = saved_games::list(&pool).await?;

    Ok(Json(serde_json::json!({
        "saved_games": games.iter().map(saved_game_to_json).collect::<Vec<_>>(),
    })))
}

/// GET /load_game/{game_id}
pub async fn load_game(
    Extension(pool): Extension<SqlitePool>,
    Path(game_id): Path<i64>,
) -> Result<Json<JsonValue>, AppError> {
    let game = saved_games::get(&pool, game_id)
        .await?
        .ok_or(AppError::NotFound("Game not found".into()))?;

    Ok(Json(serde_json::json!({
        "game_state": {
            "fen": game.fen,
            "move_list": game.moves(),
            "player_color": game.player_color,
            "difficulty": game.difficulty,
            "timeControl": game.time_control,
        }
    })))
}

/// DELETE /delete_saved_game/{game_id}
/// Succeeds whether or not the game existed.
pub async fn delete_saved_game(
    Extension(pool): Extension<SqlitePool>,
    Path(game_id): Path<i64>,
) -> Result<Json<JsonValue>, AppError> {
    let removed = saved_games::delete(&pool, game_id).await?;
    tracing::info!(game_id, removed, "Saved game delete");

    Ok(Json(serde_json::json!({ "status": "success" })))
}
