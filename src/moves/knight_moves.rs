//! Knight move generation.
//!
//! On-board knight targets are precomputed per square; generation only has to
//! drop squares held by the knight's own side.

use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_types::{Side, Square};
use crate::moves::move_rays::{leaper_table, step_targets};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub const KNIGHT_TARGETS: [u64; 64] = leaper_table(&KNIGHT_OFFSETS);

/// Pseudo-legal knight destinations from `from` for a knight owned by `side`.
#[inline]
pub fn knight_moves(board: &Board, from: Square, side: Side) -> SquareSet {
    step_targets(board, KNIGHT_TARGETS[from as usize], side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn knight_on_b8_is_clipped_to_three_targets() {
        let mut board = Board::empty();
        board.put(1, Piece::white(PieceKind::Knight));
        let moves = knight_moves(&board, 1, Side::White);
        assert_eq!(moves.to_vec(), vec![11, 16, 18]);
    }

    #[test]
    fn knight_in_centre_reaches_eight_squares() {
        let board = Board::empty();
        assert_eq!(KNIGHT_TARGETS[27].count_ones(), 8);
        assert_eq!(knight_moves(&board, 27, Side::Black).len(), 8);
    }

    #[test]
    fn knight_captures_enemies_but_not_friends() {
        let mut board = Board::empty();
        board.put(27, Piece::white(PieceKind::Knight));
        board.put(10, Piece::white(PieceKind::Pawn));
        board.put(12, Piece::black(PieceKind::Pawn));
        let moves = knight_moves(&board, 27, Side::White);
        assert!(!moves.contains(10));
        assert!(moves.contains(12));
        assert_eq!(moves.len(), 7);
    }
}
