use serde::{Deserialize, Serialize};
use shakmaty::fen::Fen;

use crate::moves::MoveList;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid move #{index} ({token:?}): {reason}")]
    InvalidMove {
        index: usize,
        token: String,
        reason: &'static str,
    },

    #[error("timeControl must be a positive number of seconds, got {0}")]
    InvalidTimeControl(i64),
}

/// A resumable game position as the browser client describes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub fen: String,
    pub moves: MoveList,
    pub player_color: String, // "w" / "b" from the client, free-form here
    pub difficulty: String,
    pub time_control: Option<i64>, // seconds per side
}

impl GameSnapshot {
    pub fn validate(&self) -> Result<(), SnapshotError> {
        validate_fen(&self.fen)?;
        self.moves.validate()?;
        validate_label("playerColor", &self.player_color)?;
        validate_label("difficulty", &self.difficulty)?;
        match self.time_control {
            Some(secs) if secs <= 0 => Err(SnapshotError::InvalidTimeControl(secs)),
            _ => Ok(()),
        }
    }
}

/// Syntax check only; the position itself may be unreachable or illegal.
pub fn validate_fen(fen: &str) -> Result<(), SnapshotError> {
    let fen = fen.trim();
    if fen.is_empty() {
        return Err(SnapshotError::Empty { field: "fen" });
    }
    fen.parse::<Fen>()
        .map(|_| ())
        .map_err(|e| SnapshotError::InvalidFen(e.to_string()))
}

pub fn validate_label(field: &'static str, value: &str) -> Result<(), SnapshotError> {
    if value.trim().is_empty() {
        return Err(SnapshotError::Empty { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            fen: START_FEN.to_string(),
            moves: MoveList::from(&["e4", "e5"][..]),
            player_color: "white".to_string(),
            difficulty: "easy".to_string(),
            time_control: None,
        }
    }

    #[test]
    fn test_valid_snapshot() {
        assert_eq!(snapshot().validate(), Ok(()));
    }

    #[test]
    fn test_fen_syntax() {
        assert!(validate_fen(START_FEN).is_ok());
        assert!(validate_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").is_ok());
        assert_eq!(validate_fen("  "), Err(SnapshotError::Empty { field: "fen" }));
        assert!(matches!(validate_fen("not a fen"), Err(SnapshotError::InvalidFen(_))));
    }

    #[test]
    fn test_blank_labels_rejected() {
        let mut s = snapshot();
        s.difficulty = " ".to_string();
        assert_eq!(s.validate(), Err(SnapshotError::Empty { field: "difficulty" }));
    }

    #[test]
    fn test_time_control_must_be_positive() {
        let mut s = snapshot();
        s.time_control = Some(600);
        assert!(s.validate().is_ok());
        s.time_control = Some(0);
        assert_eq!(s.validate(), Err(SnapshotError::InvalidTimeControl(0)));
    }
}
