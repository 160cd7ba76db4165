//! Word discovery.
//!
//! After a move is written to the board, the finder reads the main word
//! through the anchor tile and one cross word through every placed tile
//! that touches a letter on the perpendicular axis. Cross scans are made
//! with `cross = true`, which stops them from spawning further scans, so
//! recursion is exactly one level deep.

use crate::action::Tile;
use crate::dictionary::WordOracle;
use crate::rules::{Axis, main_axis};
use crate::types::{Board, Cell};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A contiguous run of letters read off the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Candidate {
    /// Letters in reading order.
    text: String,
    /// Direction the run was read in.
    axis: Axis,
    /// First cell of the run as `(row, col)`.
    start: (i32, i32),
    /// Whether the oracle accepted the run.
    accepted: bool,
}

/// Scans every candidate word touched by the placed tiles.
///
/// The board must already hold the tiles. The first tile anchors the main
/// word; cross words follow in tile order. Rejected candidates are kept
/// with `accepted == false`.
#[instrument(skip(board, tiles, oracle), fields(tiles = tiles.len()))]
pub fn discover<O: WordOracle + ?Sized>(board: &Board, tiles: &[Tile], oracle: &O) -> Vec<Candidate> {
    let mut found = Vec::new();
    let (Some(anchor), Some(axis)) = (tiles.first(), main_axis(tiles)) else {
        return found;
    };
    scan(board, anchor.position(), axis, tiles, oracle, false, &mut found);
    found
}

/// Returns the accepted words formed by the placed tiles, main word first.
#[instrument(skip(board, tiles, oracle), fields(tiles = tiles.len()))]
pub fn find_words<O: WordOracle + ?Sized>(board: &Board, tiles: &[Tile], oracle: &O) -> Vec<String> {
    discover(board, tiles, oracle)
        .into_iter()
        .filter(|c| c.accepted)
        .map(|c| c.text)
        .collect()
}

fn scan<O: WordOracle + ?Sized>(
    board: &Board,
    origin: (i32, i32),
    axis: Axis,
    tiles: &[Tile],
    oracle: &O,
    cross: bool,
    found: &mut Vec<Candidate>,
) {
    if let Some((text, start)) = read_run(board, origin, axis) {
        let accepted = oracle.is_match(&text);
        debug!(%text, %axis, ?start, accepted, cross, "Scanned word");
        found.push(Candidate {
            text,
            axis,
            start,
            accepted,
        });
    }

    if cross {
        return;
    }

    let perpendicular = axis.cross();
    for tile in tiles {
        if has_neighbor(board, tile.position(), perpendicular) {
            scan(board, tile.position(), perpendicular, tiles, oracle, true, found);
        }
    }
}

/// Reads the maximal run of letters through `origin` along `axis`.
///
/// Walks backward to the start of the run, then forward to its end. Reads
/// past the board edge come back empty, which ends the walk.
fn read_run(board: &Board, origin: (i32, i32), axis: Axis) -> Option<(String, (i32, i32))> {
    let (dr, dc) = axis.step();
    let (mut row, mut col) = origin;
    if !board.cell(row, col).is_letter() {
        return None;
    }

    while board.cell(row - dr, col - dc).is_letter() {
        row -= dr;
        col -= dc;
    }
    let start = (row, col);

    let mut text = String::new();
    while let Cell::Letter(ch) = board.cell(row, col) {
        text.push(ch);
        row += dr;
        col += dc;
    }
    Some((text, start))
}

fn has_neighbor(board: &Board, (row, col): (i32, i32), axis: Axis) -> bool {
    let (dr, dc) = axis.step();
    board.cell(row - dr, col - dc).is_letter() || board.cell(row + dr, col + dc).is_letter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn place(board: &mut Board, word: &str, row: usize, col: usize, axis: Axis) -> Vec<Tile> {
        let (dr, dc) = axis.step();
        word.chars()
            .enumerate()
            .map(|(i, ch)| {
                let r = row + i * dr as usize;
                let c = col + i * dc as usize;
                board.set(r, c, Cell::Letter(ch)).unwrap();
                Tile::new(ch, r as i32, c as i32)
            })
            .collect()
    }

    fn dictionary() -> Dictionary {
        ["button", "no", "not", "ow", "know", "snow", "snot", "home", "ab", "on"]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_main_word_from_anchor() {
        let mut board = Board::default();
        let tiles = place(&mut board, "button", 7, 7, Axis::Row);
        assert_eq!(find_words(&board, &tiles, &dictionary()), vec!["button"]);
    }

    #[test]
    fn test_main_word_extends_through_existing_letters() {
        let mut board = Board::default();
        place(&mut board, "no", 7, 7, Axis::Row);
        let mut tiles = place(&mut board, "s", 7, 6, Axis::Row);
        tiles.extend(place(&mut board, "w", 7, 9, Axis::Row));
        assert_eq!(find_words(&board, &tiles, &dictionary()), vec!["snow"]);
    }

    #[test]
    fn test_cross_words_for_each_placed_tile() {
        let mut board = Board::default();
        place(&mut board, "know", 7, 6, Axis::Row);
        let tiles = place(&mut board, "not", 6, 8, Axis::Row);
        let candidates = discover(&board, &tiles, &dictionary());
        let texts: Vec<_> = candidates.iter().map(|c| c.text().as_str()).collect();
        assert_eq!(texts, vec!["not", "no", "ow"]);
        assert!(candidates.iter().all(|c| *c.accepted()));
        assert_eq!(*candidates[1].axis(), Axis::Column);
        assert_eq!(*candidates[1].start(), (6, 8));
    }

    #[test]
    fn test_rejected_cross_word_is_dropped() {
        let mut board = Board::default();
        place(&mut board, "know", 7, 6, Axis::Row);
        let tiles = place(&mut board, "snot", 6, 7, Axis::Row);
        let candidates = discover(&board, &tiles, &dictionary());
        let sn = candidates.iter().find(|c| c.text() == "sn").unwrap();
        assert!(!sn.accepted());
        let words = find_words(&board, &tiles, &dictionary());
        assert_eq!(words, vec!["snot", "no", "ow"]);
    }

    #[test]
    fn test_single_tile_reads_both_axes() {
        let mut board = Board::default();
        place(&mut board, "no", 7, 7, Axis::Row);
        let tiles = place(&mut board, "t", 7, 9, Axis::Row);
        let candidates = discover(&board, &tiles, &dictionary());
        assert_eq!(candidates[0].text(), "t");
        assert_eq!(*candidates[0].axis(), Axis::Column);
        assert_eq!(find_words(&board, &tiles, &dictionary()), vec!["not"]);
    }

    #[test]
    fn test_scan_stops_at_board_edges() {
        let mut board = Board::new(3, 2);
        let tiles = place(&mut board, "ab", 0, 0, Axis::Row);
        assert_eq!(find_words(&board, &tiles, &dictionary()), vec!["ab"]);

        let mut board = Board::new(2, 2);
        let tiles = place(&mut board, "on", 0, 1, Axis::Column);
        assert_eq!(find_words(&board, &tiles, &dictionary()), vec!["on"]);
    }

    #[test]
    fn test_no_cross_scan_without_perpendicular_neighbor() {
        let mut board = Board::default();
        place(&mut board, "ab", 8, 7, Axis::Row);
        let tiles = place(&mut board, "n", 7, 8, Axis::Row);
        let candidates = discover(&board, &tiles, &dictionary());
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "nb");
    }

    #[test]
    fn test_empty_move_finds_nothing() {
        let board = Board::default();
        assert!(discover(&board, &[], &dictionary()).is_empty());
    }
}
