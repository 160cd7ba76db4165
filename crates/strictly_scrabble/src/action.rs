//! First-class action types for a turn.
//!
//! A move is a set of tiles proposed together. Its outcome is always a
//! value: rejected moves are reported, never raised.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single letter proposed for a board position.
///
/// Coordinates are signed so that off-board proposals can be expressed
/// and rejected by the placement rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new, derive_more::Display)]
#[display("'{letter}' at ({row}, {col})")]
pub struct Tile {
    /// The letter to place.
    pub letter: char,
    /// Target row.
    pub row: i32,
    /// Target column.
    #[serde(alias = "column")]
    pub col: i32,
}

impl Tile {
    /// Returns the target position as `(row, col)`.
    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }
}

/// Outcome of a single `play_tiles` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveResult {
    /// Whether the move was committed.
    pub valid: bool,
    /// Points earned by the move (0 when rejected).
    pub score: u32,
}

impl MoveResult {
    /// A committed move worth `score` points.
    pub fn accepted(score: u32) -> Self {
        Self { valid: true, score }
    }

    /// A rejected move.
    pub fn rejected() -> Self {
        Self::default()
    }
}

/// Why a proposed tile set failed the placement rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum PlacementError {
    /// No tiles were proposed.
    #[display("Move contains no tiles")]
    EmptyMove,

    /// A tile lies outside the board.
    #[display("Tile {} is not on the board", _0)]
    OffBoard(Tile),

    /// A tile targets an occupied cell.
    #[display("Tile {} targets an occupied cell", _0)]
    SpotTaken(Tile),

    /// Two tiles in the move target the same cell.
    #[display("Tile {} shares its cell with another tile in the move", _0)]
    DuplicatePosition(Tile),

    /// Tiles do not share a single row or column.
    #[display("All tiles must lie on one row or one column")]
    NotOneAxis,

    /// The opening move does not cover the center cell.
    #[display("The first move must cover the center cell ({row}, {col})")]
    MissesCenter {
        /// Center row.
        row: usize,
        /// Center column.
        col: usize,
    },
}

impl std::error::Error for PlacementError {}

/// Why a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// Rejected before the board was touched.
    #[display("Invalid placement: {}", _0)]
    Placement(PlacementError),

    /// Tiles were placed but formed no dictionary word.
    #[display("Move forms no scoring word")]
    NoWords,

    /// The only word formed is no longer than the tiles just placed, so
    /// the move does not build on anything already on the board.
    #[display("Word '{word}' does not connect to tiles already on the board")]
    Disconnected {
        /// The isolated word.
        word: String,
    },
}

impl std::error::Error for Rejection {}

impl From<PlacementError> for Rejection {
    fn from(err: PlacementError) -> Self {
        Rejection::Placement(err)
    }
}

/// Detailed outcome of a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PlayReport {
    /// The `{valid, score}` result.
    result: MoveResult,
    /// Accepted words formed by the move, main word first.
    words: Vec<String>,
    /// Rejection reason, when the move was rejected.
    rejection: Option<Rejection>,
}

impl PlayReport {
    /// Report for a committed move.
    #[instrument(skip(words))]
    pub fn committed(score: u32, words: Vec<String>) -> Self {
        Self {
            result: MoveResult::accepted(score),
            words,
            rejection: None,
        }
    }

    /// Report for a rejected move.
    #[instrument(skip(words))]
    pub fn rejected(rejection: Rejection, words: Vec<String>) -> Self {
        Self {
            result: MoveResult::rejected(),
            words,
            rejection: Some(rejection),
        }
    }

    /// Consumes the report, keeping only the `{valid, score}` result.
    pub fn into_result(self) -> MoveResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_deserializes_from_col_or_column() {
        let a: Tile = serde_json::from_str(r#"{"letter":"b","row":7,"col":8}"#).unwrap();
        let b: Tile = serde_json::from_str(r#"{"letter":"b","row":7,"column":8}"#).unwrap();
        assert_eq!(a, b);
        assert_eq!(a, Tile::new('b', 7, 8));
    }

    #[test]
    fn test_move_result_serializes_as_valid_and_score() {
        let json = serde_json::to_value(MoveResult::accepted(8)).unwrap();
        assert_eq!(json, serde_json::json!({ "valid": true, "score": 8 }));
        assert_eq!(MoveResult::rejected(), MoveResult { valid: false, score: 0 });
    }

    #[test]
    fn test_rejection_messages() {
        let err = Rejection::from(PlacementError::OffBoard(Tile::new('l', 7, 15)));
        assert_eq!(
            err.to_string(),
            "Invalid placement: Tile 'l' at (7, 15) is not on the board"
        );
        let err = Rejection::Disconnected { word: "home".into() };
        assert!(err.to_string().contains("home"));
    }
}
