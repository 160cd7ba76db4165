//! Turn-by-turn session around a single game.
//!
//! The engine only reports each move's result. The session is the caller
//! that numbers turns, keeps the transcript and accumulates the total.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strictly_scrabble::{Board, Game, MoveResult, Tile, WordOracle};
use tracing::{info, instrument};

/// One played turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    turn: usize,
    /// Tiles proposed this turn.
    tiles: Vec<Tile>,
    /// `{valid, score}` for the turn.
    result: MoveResult,
    /// Accepted words formed.
    words: Vec<String>,
    /// Rejection reason, if any.
    reason: Option<String>,
    /// Running total after this turn.
    total: u32,
}

/// Serializable summary of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Transcript {
    /// Turns in play order.
    turns: Vec<TurnRecord>,
    /// Sum of all committed scores.
    total: u32,
    /// Final board, one string per row.
    board: Vec<String>,
}

/// A game plus its turn history.
#[derive(Debug)]
pub struct Session<O> {
    game: Game<O>,
    turns: Vec<TurnRecord>,
    total: u32,
}

impl<O: WordOracle> Session<O> {
    /// Starts a session on the given board.
    #[instrument(skip(board, oracle))]
    pub fn new(board: Board, oracle: O) -> Self {
        Self {
            game: Game::with_board(board, oracle),
            turns: Vec::new(),
            total: 0,
        }
    }

    /// Plays one turn and records it.
    #[instrument(skip(self, tiles), fields(turn = self.turns.len() + 1, tiles = tiles.len()))]
    pub fn play(&mut self, tiles: Vec<Tile>) -> &TurnRecord {
        let report = self.game.play(&tiles);
        let result = *report.result();
        self.total += result.score;

        let record = TurnRecord {
            turn: self.turns.len() + 1,
            tiles,
            result,
            words: report.words().clone(),
            reason: report.rejection().as_ref().map(ToString::to_string),
            total: self.total,
        };
        info!(turn = record.turn, valid = result.valid, score = result.score, total = self.total, "Turn played");
        self.turns.push(record);
        &self.turns[self.turns.len() - 1]
    }

    /// Plays every move in order.
    pub fn play_all(&mut self, moves: impl IntoIterator<Item = Vec<Tile>>) {
        for tiles in moves {
            self.play(tiles);
        }
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game<O> {
        &self.game
    }

    /// Returns the recorded turns.
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Returns the running total.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Builds a serializable transcript.
    pub fn transcript(&self) -> Transcript {
        Transcript {
            turns: self.turns.clone(),
            total: self.total,
            board: self.game.board().to_string().lines().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_scrabble::Dictionary;

    fn session() -> Session<Dictionary> {
        Session::new(Board::default(), Dictionary::from_word_list("no\nsnow\n"))
    }

    #[test]
    fn test_totals_accumulate_committed_scores() {
        let mut session = session();
        session.play(vec![Tile::new('n', 7, 7), Tile::new('o', 7, 8)]);
        session.play(vec![Tile::new('x', 0, 0)]);
        let last = session.play(vec![Tile::new('s', 7, 6), Tile::new('w', 7, 9)]);
        assert_eq!(*last.turn(), 3);
        assert_eq!(*last.total(), 9);
        assert_eq!(session.total(), 9);
        assert!(session.turns()[1].reason().is_some());
    }

    #[test]
    fn test_transcript_board_rows() {
        let mut session = session();
        session.play(vec![Tile::new('n', 7, 7), Tile::new('o', 7, 8)]);
        let transcript = session.transcript();
        assert_eq!(transcript.board().len(), 14);
        assert_eq!(transcript.board()[7], ".......no.....");
        assert_eq!(*transcript.total(), 2);
    }
}
