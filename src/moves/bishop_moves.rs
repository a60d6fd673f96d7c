//! Bishop move generation along the four diagonal rays.

use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_types::{Side, Square};
use crate::moves::move_rays::{slide_targets, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_moves(board: &Board, from: Square, side: Side) -> SquareSet {
    slide_targets(board, from, side, &DIAGONAL_DIRECTIONS)
}
