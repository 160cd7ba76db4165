//! Placement rules.
//!
//! This module contains pure functions for judging a proposed tile set
//! against the board and the game phase. Rules never touch the board;
//! they are kept apart from board storage so the game can compose them.

pub mod axis;
pub mod placement;

pub use axis::{Axis, main_axis};
pub use placement::{
    are_placements_valid, are_positions_distinct, check_placements, is_all_one_axis,
    is_first_move_valid, is_on_board, is_spot_open,
};
