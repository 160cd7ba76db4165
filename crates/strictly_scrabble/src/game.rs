//! Game engine: validate, place, discover, score, then commit or roll back.

use crate::action::{MoveResult, PlayReport, Rejection, Tile};
use crate::dictionary::WordOracle;
use crate::rules::check_placements;
use crate::score::score_tiles;
use crate::types::{Board, Cell};
use crate::words::find_words;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Whether the opening move has been made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// No move has formed a word yet; the center cell must be covered.
    #[default]
    AwaitingFirstMove,
    /// Normal play.
    Normal,
}

/// Word board game engine.
///
/// Owns the board and the first-move flag. The oracle is injected so the
/// engine never reaches for global dictionary state.
#[derive(Debug, Clone)]
pub struct Game<O> {
    board: Board,
    oracle: O,
    phase: Phase,
    last_result: MoveResult,
}

impl<O: WordOracle> Game<O> {
    /// Creates a game on the default 14x14 board.
    #[instrument(skip(oracle))]
    pub fn new(oracle: O) -> Self {
        Self::with_board(Board::default(), oracle)
    }

    /// Creates a game on the given board, awaiting the first move.
    #[instrument(skip(board, oracle), fields(height = board.height(), width = board.width()))]
    pub fn with_board(board: Board, oracle: O) -> Self {
        Self {
            board,
            oracle,
            phase: Phase::AwaitingFirstMove,
            last_result: MoveResult::rejected(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the word oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true until a move has formed at least one word.
    pub fn is_first_move(&self) -> bool {
        self.phase == Phase::AwaitingFirstMove
    }

    /// Returns the result of the most recent move.
    pub fn last_result(&self) -> MoveResult {
        self.last_result
    }

    /// Plays a set of tiles, returning `{valid, score}`.
    ///
    /// Either every tile ends up on the board or the board is left exactly
    /// as it was.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn play_tiles(&mut self, tiles: &[Tile]) -> MoveResult {
        self.play(tiles).into_result()
    }

    /// Plays a set of tiles, returning the words found and any rejection
    /// reason along with the result.
    #[instrument(skip(self, tiles), fields(phase = %self.phase, tiles = tiles.len()))]
    pub fn play(&mut self, tiles: &[Tile]) -> PlayReport {
        let report = self.evaluate(tiles);
        self.last_result = *report.result();
        report
    }

    fn evaluate(&mut self, tiles: &[Tile]) -> PlayReport {
        let first_move = self.is_first_move();
        if let Err(reason) = check_placements(tiles, &self.board, first_move) {
            return PlayReport::rejected(reason.into(), Vec::new());
        }

        self.write(tiles, true);
        let words = find_words(&self.board, tiles, &self.oracle);
        debug!(?words, "Words formed");

        if first_move && !words.is_empty() {
            self.phase = Phase::Normal;
            info!("Opening move made");
        }

        match settle(&words, tiles.len(), first_move) {
            Ok(points) => {
                info!(points, ?words, "Move committed");
                PlayReport::committed(points, words)
            }
            Err(rejection) => {
                self.write(tiles, false);
                warn!(%rejection, "Move rolled back");
                PlayReport::rejected(rejection, words)
            }
        }
    }

    /// Writes the tiles' letters, or clears their cells.
    ///
    /// Only called with tiles that passed the placement rules, so every
    /// position is on the board.
    fn write(&mut self, tiles: &[Tile], place: bool) {
        for tile in tiles {
            let cell = if place {
                Cell::Letter(tile.letter)
            } else {
                Cell::Empty
            };
            if let Err(e) = self.board.set(tile.row as usize, tile.col as usize, cell) {
                warn!(error = %e, %tile, "Skipped write outside board");
            }
        }
    }
}

impl<O: WordOracle + Default> Default for Game<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

/// Decides a move's legality and score in one step.
///
/// No accepted word scores nothing. After the opening move, a lone word no
/// longer than the tiles just placed cannot include any letter already on
/// the board, so it is disconnected and scores nothing either.
fn settle(words: &[String], placed: usize, first_move: bool) -> Result<u32, Rejection> {
    let points = score_tiles(words);

    if words.is_empty() {
        return Err(Rejection::NoWords);
    }

    if let [word] = words {
        if word.chars().count() <= placed && !first_move {
            return Err(Rejection::Disconnected { word: word.clone() });
        }
    }

    if points == 0 {
        return Err(Rejection::NoWords);
    }

    Ok(points)
}
