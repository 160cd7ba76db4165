//! Strictly Words - Unified CLI
//!
//! Validates and scores word board moves against a dictionary.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_scrabble::{Dictionary, WordOracle, score_word};
use strictly_words::{ScrabbleConfig, Session, load_moves};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = ScrabbleConfig::load_or_default(&cli.config)?;
    if let Some(dictionary) = cli.dictionary {
        config = config.with_dictionary(dictionary);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play { moves } => run_play(&config, moves),
        Command::Check { words } => run_check(&config, &words),
        Command::Score { words } => run_score(&words),
    }
}

fn load_dictionary(config: &ScrabbleConfig) -> Result<Dictionary> {
    Dictionary::from_file(config.dictionary())
        .with_context(|| format!("Loading dictionary {}", config.dictionary().display()))
}

/// Play every move in a JSON file and print the transcript
#[instrument(skip(config))]
fn run_play(config: &ScrabbleConfig, moves: std::path::PathBuf) -> Result<()> {
    let dictionary = load_dictionary(config)?;
    let moves = load_moves(&moves)?;
    info!(moves = moves.len(), "Starting session");

    let mut session = Session::new(config.board(), dictionary);
    session.play_all(moves);

    let transcript = session.transcript();
    println!("{}", serde_json::to_string_pretty(&transcript)?);
    info!(total = session.total(), "Session finished");
    Ok(())
}

/// Report dictionary membership for each word
#[instrument(skip(config))]
fn run_check(config: &ScrabbleConfig, words: &[String]) -> Result<()> {
    let dictionary = load_dictionary(config)?;
    for word in words {
        let verdict = if dictionary.is_match(word) { "valid" } else { "invalid" };
        println!("{}\t{}", word, verdict);
    }
    Ok(())
}

/// Print each word's letter score
#[instrument]
fn run_score(words: &[String]) -> Result<()> {
    for word in words {
        println!("{}\t{}", word, score_word(word));
    }
    Ok(())
}
