pub mod health;
pub mod history;
pub mod saved_games;

use chess_core::{GameSnapshot, MoveList};
use serde::Deserialize;

/// Fields shared by the save and history request bodies.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameFields {
    pub fen: String,
    pub move_list: Vec<String>,
    pub player_color: String,
    pub difficulty: String,
    pub time_control: Option<i64>,
}

impl GameFields {
    pub fn into_snapshot(self) -> GameSnapshot {
        GameSnapshot {
            fen: self.fen,
            moves: MoveList::new(self.move_list),
            player_color: self.player_color,
            difficulty: self.difficulty,
            time_control: self.time_control,
        }
    }
}
