//! Move application on the live board: permanent moves and scoped trial moves.
//!
//! `TrialMove` is the only way the engine mutates a board provisionally. It
//! applies the move when created and puts both touched cells back when
//! dropped, so restoration also happens on early return and during unwinding.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::{Move, Piece, Side};
use crate::move_generation::legal_move_checks::is_king_in_check;

/// Move the piece on `mv.from` to `mv.to` and clear the origin.
/// Returns whatever stood on the destination.
pub fn apply_move(board: &mut Board, mv: Move) -> Option<Piece> {
    let moving = board.piece_at(mv.from);
    let captured = board.piece_at(mv.to);
    board.set(mv.to, moving);
    board.clear(mv.from);
    captured
}

/// Provisional move on a borrowed board, undone on drop.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    mv: Move,
    backup_from: Option<Piece>,
    backup_to: Option<Piece>,
}

impl<'a> TrialMove<'a> {
    pub fn new(board: &'a mut Board, mv: Move) -> Self {
        let backup_from = board.piece_at(mv.from);
        let backup_to = board.piece_at(mv.to);
        board.set(mv.to, backup_from);
        board.clear(mv.from);
        Self {
            board,
            mv,
            backup_from,
            backup_to,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.board
    }

    /// Mutable access for nested trials (perft recursion). Nested mutations
    /// must be balanced before this trial is dropped; only `from` and `to`
    /// are restored here.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        self.board
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.backup_to
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.mv.from, self.backup_from);
        self.board.set(self.mv.to, self.backup_to);
    }
}

/// Run `f` against the board with `mv` provisionally applied.
pub fn with_trial_move<R>(board: &mut Board, mv: Move, f: impl FnOnce(&Board) -> R) -> R {
    let trial = TrialMove::new(board, mv);
    f(trial.board())
}

/// True when playing `mv` would leave `side`'s king attacked.
#[inline]
pub fn leaves_king_in_check(board: &mut Board, mv: Move, side: Side, rules: &RulesConfig) -> bool {
    with_trial_move(board, mv, |after| is_king_in_check(after, side, rules))
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::game_state::chess_rules::starting_board;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn apply_move_reports_capture_and_clears_origin() {
        let mut board = Board::empty();
        board.put(36, Piece::white(PieceKind::Pawn));
        board.put(27, Piece::black(PieceKind::Knight));
        let captured = apply_move(&mut board, Move::new(36, 27));
        assert_eq!(captured, Some(Piece::black(PieceKind::Knight)));
        assert_eq!(board.piece_at(27), Some(Piece::white(PieceKind::Pawn)));
        assert!(board.is_empty(36));
    }

    #[test]
    fn trial_move_is_visible_inside_and_undone_after() {
        let mut board = starting_board();
        let before = board;
        {
            let trial = TrialMove::new(&mut board, Move::new(52, 36));
            assert!(trial.board().is_empty(52));
            assert_eq!(trial.board().piece_at(36), Some(Piece::white(PieceKind::Pawn)));
            assert_eq!(trial.captured(), None);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn trial_move_restores_captured_piece() {
        let mut board = Board::empty();
        board.put(60, Piece::white(PieceKind::Queen));
        board.put(4, Piece::black(PieceKind::Rook));
        let before = board;
        let captured = with_trial_move(&mut board, Move::new(60, 4), |after| {
            assert_eq!(after.piece_count(), 1);
            after.piece_at(4)
        });
        assert_eq!(captured, Some(Piece::white(PieceKind::Queen)));
        assert_eq!(board, before);
    }

    #[test]
    fn trial_move_restores_board_when_evaluation_panics() {
        let mut board = starting_board();
        let before = board;
        let result = catch_unwind(AssertUnwindSafe(|| {
            with_trial_move(&mut board, Move::new(57, 42), |after| {
                if after.piece_at(42).is_some() {
                    panic!("evaluation failed mid-trial");
                }
            })
        }));
        assert!(result.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn pinned_piece_move_leaves_king_in_check() {
        let mut board = Board::empty();
        board.put(60, Piece::white(PieceKind::King));
        board.put(52, Piece::white(PieceKind::Rook));
        board.put(4, Piece::black(PieceKind::Rook));
        let rules = RulesConfig::default();
        assert!(leaves_king_in_check(&mut board, Move::new(52, 51), Side::White, &rules));
        assert!(!leaves_king_in_check(&mut board, Move::new(52, 44), Side::White, &rules));
        assert_eq!(board.piece_at(52), Some(Piece::white(PieceKind::Rook)));
    }
}
