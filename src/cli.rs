//! Command-line interface for strictly_words.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Words - validate and score word board moves
#[derive(Parser, Debug)]
#[command(name = "strictly_words")]
#[command(about = "Move validation and scoring for a word board game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "scrabble.toml", global = true)]
    pub config: PathBuf,

    /// Word list to use instead of the configured one
    #[arg(short, long, global = true)]
    pub dictionary: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a sequence of moves from a JSON file and print the transcript
    Play {
        /// JSON array of moves; each move is an array of {letter, row, col}
        #[arg(short, long)]
        moves: PathBuf,
    },

    /// Check whether words are in the dictionary
    Check {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Print the letter score of each word
    Score {
        /// Words to score
        #[arg(required = true)]
        words: Vec<String>,
    },
}
