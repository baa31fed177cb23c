//! Ordered move sequences and the comma-delimited form used in listings.

use serde::{Deserialize, Serialize};

use crate::game_data::SnapshotError;

/// Separator used by the delimited form shown in game listings.
pub const MOVE_DELIMITER: &str = ",";

/// Moves in play order, as the client recorded them (SAN tokens in practice).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveList(Vec<String>);

impl MoveList {
    pub fn new(moves: Vec<String>) -> Self {
        Self(moves)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Join into `"e4,e5,Nf3"`. An empty list renders as `""`.
    pub fn to_delimited(&self) -> String {
        self.0.join(MOVE_DELIMITER)
    }

    /// Check every token; reports the first bad one with its index.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for (index, token) in self.0.iter().enumerate() {
            validate_move_token(token).map_err(|reason| SnapshotError::InvalidMove {
                index,
                token: token.clone(),
                reason,
            })?;
        }
        Ok(())
    }
}

impl From<&[&str]> for MoveList {
    fn from(moves: &[&str]) -> Self {
        Self(moves.iter().map(|m| m.to_string()).collect())
    }
}

/// A token must be non-empty and free of whitespace and the listing delimiter.
/// Move legality is not checked.
pub fn validate_move_token(token: &str) -> Result<(), &'static str> {
    if token.is_empty() {
        return Err("move is empty");
    }
    if token.contains(MOVE_DELIMITER) {
        return Err("move contains ','");
    }
    if token.chars().any(char::is_whitespace) {
        return Err("move contains whitespace");
    }
    Ok(())
}
