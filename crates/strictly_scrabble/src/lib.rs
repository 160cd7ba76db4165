//! Strictly Scrabble - move validation and scoring for a word board game.
//!
//! Given a board and a proposed set of tiles, the engine decides whether
//! the placement is legal, finds every word the move forms and scores
//! them.
//!
//! # Architecture
//!
//! - **Board**: fixed-size letter grid
//! - **Rules**: pure placement predicates (on board, open, one axis, center)
//! - **Words**: main-axis and cross-axis word discovery
//! - **Score**: per-letter point table
//! - **Game**: validate, place, discover, score, commit or roll back
//!
//! # Example
//!
//! ```
//! use strictly_scrabble::{Dictionary, Game, MoveResult, Tile};
//!
//! let dictionary = Dictionary::from_word_list("no\nsnow\n");
//! let mut game = Game::new(dictionary);
//!
//! let opening = [Tile::new('n', 7, 7), Tile::new('o', 7, 8)];
//! assert_eq!(game.play_tiles(&opening), MoveResult::accepted(2));
//!
//! let extension = [Tile::new('s', 7, 6), Tile::new('w', 7, 9)];
//! assert_eq!(game.play_tiles(&extension), MoveResult::accepted(7));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod dictionary;
mod game;
pub mod rules;
mod score;
mod types;
mod words;

pub use action::{MoveResult, PlacementError, PlayReport, Rejection, Tile};
pub use dictionary::{Dictionary, DictionaryError, WordOracle};
pub use game::{Game, Phase};
pub use rules::Axis;
pub use score::{letter_value, score_tiles, score_word};
pub use types::{Board, BoardError, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use words::{Candidate, discover, find_words};
