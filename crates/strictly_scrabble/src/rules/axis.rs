//! Move axis detection.

use crate::action::Tile;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Direction a word runs along.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Left to right along a row.
    Row,
    /// Top to bottom along a column.
    Column,
}

impl Axis {
    /// Unit step `(d_row, d_col)` that advances along this axis.
    pub fn step(self) -> (i32, i32) {
        match self {
            Axis::Row => (0, 1),
            Axis::Column => (1, 0),
        }
    }

    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Axis::Row => Axis::Column,
            Axis::Column => Axis::Row,
        }
    }
}

/// Determines the main axis of a move.
///
/// Column alignment is tested first, so a single tile (aligned both ways)
/// resolves to [`Axis::Column`]. Returns `None` for an empty move.
#[instrument]
pub fn main_axis(tiles: &[Tile]) -> Option<Axis> {
    let first = tiles.first()?;
    if tiles.iter().all(|t| t.col == first.col) {
        Some(Axis::Column)
    } else {
        Some(Axis::Row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tile_is_column() {
        assert_eq!(main_axis(&[Tile::new('a', 3, 4)]), Some(Axis::Column));
    }

    #[test]
    fn test_row_and_column_moves() {
        let row = [Tile::new('n', 7, 7), Tile::new('o', 7, 8)];
        let col = [Tile::new('n', 7, 7), Tile::new('o', 8, 7)];
        assert_eq!(main_axis(&row), Some(Axis::Row));
        assert_eq!(main_axis(&col), Some(Axis::Column));
    }

    #[test]
    fn test_empty_move_has_no_axis() {
        assert_eq!(main_axis(&[]), None);
    }

    #[test]
    fn test_cross_and_display() {
        for axis in <Axis as strum::IntoEnumIterator>::iter() {
            assert_ne!(axis.cross(), axis);
            assert_eq!(axis.cross().cross(), axis);
            let (dr, dc) = axis.step();
            assert_eq!(dr + dc, 1);
        }
        assert_eq!(Axis::Column.to_string(), "column");
    }
}
