pub mod game_data;
pub mod moves;

pub use game_data::{validate_fen, validate_label, GameSnapshot, SnapshotError};
pub use moves::{validate_move_token, MoveList, MOVE_DELIMITER};
