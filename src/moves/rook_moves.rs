//! Rook move generation along the four orthogonal rays.

use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_types::{Side, Square};
use crate::moves::move_rays::{slide_targets, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_moves(board: &Board, from: Square, side: Side) -> SquareSet {
    slide_targets(board, from, side, &ORTHOGONAL_DIRECTIONS)
}
