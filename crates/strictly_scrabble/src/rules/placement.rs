//! Placement validity: on-board, unoccupied, single-axis, first-move center.

use crate::action::{PlacementError, Tile};
use crate::types::{Board, Cell};
use std::collections::HashSet;
use tracing::{instrument, warn};

/// Checks that the tile's row and column both lie within the board.
#[instrument(skip(board))]
pub fn is_on_board(tile: &Tile, board: &Board) -> bool {
    board.contains(tile.row, tile.col)
}

/// Checks that the tile's target cell is empty.
///
/// A tile outside the board is never considered open.
#[instrument(skip(board))]
pub fn is_spot_open(tile: &Tile, board: &Board) -> bool {
    is_on_board(tile, board) && board.cell(tile.row, tile.col) == Cell::Empty
}

/// Checks that every tile shares the first tile's column, or every tile
/// shares the first tile's row.
#[instrument]
pub fn is_all_one_axis(tiles: &[Tile]) -> bool {
    let Some(first) = tiles.first() else {
        return false;
    };
    tiles.iter().all(|t| t.col == first.col) || tiles.iter().all(|t| t.row == first.row)
}

/// Checks that at least one tile covers the board's center cell.
#[instrument(skip(board))]
pub fn is_first_move_valid(tiles: &[Tile], board: &Board) -> bool {
    let (row, col) = board.center();
    tiles
        .iter()
        .any(|t| t.row as i64 == row as i64 && t.col as i64 == col as i64)
}

/// Checks that no two tiles in the move target the same cell.
#[instrument]
pub fn are_positions_distinct(tiles: &[Tile]) -> bool {
    first_duplicate(tiles).is_none()
}

fn first_duplicate(tiles: &[Tile]) -> Option<&Tile> {
    let mut seen = HashSet::with_capacity(tiles.len());
    tiles.iter().find(|t| !seen.insert(t.position()))
}

/// Validates a move, returning the first rule it breaks.
///
/// Each tile is checked for being on the board and then for landing on an
/// empty cell. The whole set must then be free of duplicates, lie on one
/// axis and, on the first move, cover the center.
#[instrument(skip(tiles, board), fields(tiles = tiles.len()))]
pub fn check_placements(
    tiles: &[Tile],
    board: &Board,
    first_move: bool,
) -> Result<(), PlacementError> {
    let result = check_all(tiles, board, first_move);
    if let Err(reason) = &result {
        warn!(%reason, "Placement rejected");
    }
    result
}

fn check_all(tiles: &[Tile], board: &Board, first_move: bool) -> Result<(), PlacementError> {
    if tiles.is_empty() {
        return Err(PlacementError::EmptyMove);
    }

    for tile in tiles {
        if !is_on_board(tile, board) {
            return Err(PlacementError::OffBoard(*tile));
        }
        if !is_spot_open(tile, board) {
            return Err(PlacementError::SpotTaken(*tile));
        }
    }

    if let Some(tile) = first_duplicate(tiles) {
        return Err(PlacementError::DuplicatePosition(*tile));
    }

    if !is_all_one_axis(tiles) {
        return Err(PlacementError::NotOneAxis);
    }

    if first_move && !is_first_move_valid(tiles, board) {
        let (row, col) = board.center();
        return Err(PlacementError::MissesCenter { row, col });
    }

    Ok(())
}

/// Returns true if the move passes every placement rule.
#[instrument(skip(tiles, board), fields(tiles = tiles.len()))]
pub fn are_placements_valid(tiles: &[Tile], board: &Board, first_move: bool) -> bool {
    check_placements(tiles, board, first_move).is_ok()
}
