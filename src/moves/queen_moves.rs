use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_types::{Side, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::rook_moves::rook_moves;

/// Union of the rook and bishop rays.
#[inline]
pub fn queen_moves(board: &Board, from: Square, side: Side) -> SquareSet {
    rook_moves(board, from, side) | bishop_moves(board, from, side)
}
