//! JSON move files.

use derive_more::{Display, Error};
use std::path::Path;
use strictly_scrabble::Tile;
use tracing::{debug, instrument};

/// Parses a JSON array of moves, each an array of tiles.
#[instrument(skip(json), fields(bytes = json.len()))]
pub fn load_moves_str(json: &str) -> Result<Vec<Vec<Tile>>, MovesError> {
    let moves: Vec<Vec<Tile>> = serde_json::from_str(json)
        .map_err(|e| MovesError::new(format!("Failed to parse moves: {}", e)))?;
    debug!(moves = moves.len(), "Parsed moves");
    Ok(moves)
}

/// Reads and parses a JSON move file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_moves(path: impl AsRef<Path>) -> Result<Vec<Vec<Tile>>, MovesError> {
    let json = std::fs::read_to_string(path.as_ref())
        .map_err(|e| MovesError::new(format!("Failed to read moves file: {}", e)))?;
    load_moves_str(&json)
}

/// Move file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Moves error: {} at {}:{}", message, file, line)]
pub struct MovesError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl MovesError {
    /// Creates a new move file error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
