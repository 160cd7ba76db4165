//! Tests for file-backed sessions: config, dictionary and move files.

use std::io::Write;
use strictly_scrabble::{Dictionary, MoveResult};
use strictly_words::{ScrabbleConfig, Session, load_moves};
use tempfile::NamedTempFile;

/// Writes `content` to a fresh temp file, returning the handle (must stay in
/// scope to keep the file alive).
fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes()).expect("Failed to write temp file");
    file
}

#[test]
fn test_play_moves_from_files() {
    let words = temp_file("button\nhome\n");
    let config_toml = format!("dictionary = {:?}\n", words.path().display().to_string());
    let config_file = temp_file(&config_toml);
    let moves = temp_file(
        r#"[
            [{"letter":"b","row":7,"col":7},{"letter":"u","row":7,"col":8},
             {"letter":"t","row":7,"col":9},{"letter":"t","row":7,"col":10},
             {"letter":"o","row":7,"col":11},{"letter":"n","row":7,"col":12}],
            [{"letter":"h","row":9,"col":8},{"letter":"o","row":9,"col":9},
             {"letter":"m","row":9,"col":10},{"letter":"e","row":9,"col":11}],
            [{"letter":"h","row":6,"col":11},{"letter":"m","row":8,"col":11},
             {"letter":"e","row":9,"col":11}]
        ]"#,
    );

    let config = ScrabbleConfig::from_file(config_file.path()).expect("Config failed");
    let dictionary = Dictionary::from_file(config.dictionary()).expect("Dictionary failed");
    let moves = load_moves(moves.path()).expect("Moves failed");

    let mut session = Session::new(config.board(), dictionary);
    session.play_all(moves);

    let results: Vec<MoveResult> = session.turns().iter().map(|t| *t.result()).collect();
    assert_eq!(
        results,
        vec![
            MoveResult::accepted(8),
            MoveResult::rejected(),
            MoveResult::accepted(9),
        ]
    );
    assert_eq!(session.total(), 17);
    assert_eq!(session.turns()[2].words(), &vec!["home".to_string()]);
}

#[test]
fn test_transcript_serializes() {
    let mut session = Session::new(
        ScrabbleConfig::default().board(),
        Dictionary::from_word_list("no"),
    );
    session.play(vec![
        strictly_scrabble::Tile::new('n', 7, 7),
        strictly_scrabble::Tile::new('o', 7, 8),
    ]);

    let json = serde_json::to_value(session.transcript()).expect("Serialize failed");
    assert_eq!(json["total"], 2);
    assert_eq!(json["turns"][0]["result"]["valid"], true);
    assert_eq!(json["turns"][0]["words"][0], "no");
    assert!(json["turns"][0]["reason"].is_null());
}

#[test]
fn test_missing_config_uses_defaults() {
    let config = ScrabbleConfig::load_or_default("/no/such/scrabble.toml").expect("Defaults failed");
    assert_eq!(config, ScrabbleConfig::default());
}
