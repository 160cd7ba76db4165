//! Strictly Words - thin front end over the strictly_scrabble engine.
//!
//! # Architecture
//!
//! - **Config**: TOML settings for dictionary path and board size
//! - **Session**: turn numbering, transcript and running total
//! - **Moves**: JSON move files
//!
//! # Example
//!
//! ```
//! use strictly_words::{Session, load_moves_str};
//! use strictly_scrabble::{Board, Dictionary};
//!
//! # fn example() -> Result<(), strictly_words::MovesError> {
//! let moves = load_moves_str(r#"[[{"letter":"n","row":7,"col":7},{"letter":"o","row":7,"col":8}]]"#)?;
//! let mut session = Session::new(Board::default(), Dictionary::from_word_list("no"));
//! session.play_all(moves);
//! assert_eq!(session.total(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod moves;
mod session;

pub use config::{ConfigError, ScrabbleConfig};
pub use moves::{MovesError, load_moves, load_moves_str};
pub use session::{Session, Transcript, TurnRecord};
