//! King move generation: the eight unit steps, no castling.

use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_types::{Side, Square};
use crate::moves::move_rays::{leaper_table, step_targets};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KING_TARGETS: [u64; 64] = leaper_table(&KING_OFFSETS);

#[inline]
pub fn king_moves(board: &Board, from: Square, side: Side) -> SquareSet {
    step_targets(board, KING_TARGETS[from as usize], side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn corner_king_has_three_targets() {
        let board = Board::empty();
        assert_eq!(king_moves(&board, 63, Side::White).to_vec(), vec![54, 55, 62]);
    }

    #[test]
    fn king_is_blocked_by_own_pieces_only() {
        let mut board = Board::empty();
        board.put(60, Piece::white(PieceKind::King));
        board.put(59, Piece::white(PieceKind::Queen));
        board.put(52, Piece::black(PieceKind::Pawn));
        let moves = king_moves(&board, 60, Side::White);
        assert!(!moves.contains(59));
        assert!(moves.contains(52));
        assert_eq!(moves.len(), 4);
    }
}
