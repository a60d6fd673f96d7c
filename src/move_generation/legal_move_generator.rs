//! Check-filtered move generation and the mobility test.
//!
//! Every candidate is tried on the live board through `TrialMove` and kept
//! only if the mover's king is not attacked afterwards. The board is handed
//! back byte-for-byte unchanged.

use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::{owned_by, Move, Side, Square};
use crate::move_generation::legal_move_apply::leaves_king_in_check;
use crate::move_generation::move_generator::{generate, MoveGenerator};

/// True as soon as one of `side`'s pseudo-legal moves leaves its king safe.
///
/// Squares are scanned in index order. Each piece's targets are computed once,
/// and every trial restores the board before the next one.
pub fn has_legal_moves(board: &mut Board, side: Side, rules: &RulesConfig) -> bool {
    for from in 0..64u8 {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if !piece.belongs_to(side) {
            continue;
        }

        for to in generate(board, from, piece, rules) {
            if !leaves_king_in_check(board, Move::new(from, to), side, rules) {
                return true;
            }
        }
    }
    false
}

/// Pseudo-legal destinations from `from` that do not expose the mover's king.
pub fn legal_destinations(board: &mut Board, from: Square, rules: &RulesConfig) -> SquareSet {
    let Some(piece) = board.piece_at(from) else {
        return SquareSet::EMPTY;
    };
    generate(board, from, piece, rules)
        .iter()
        .filter(|&to| !leaves_king_in_check(board, Move::new(from, to), piece.side, rules))
        .collect()
}

/// Every check-filtered move for `side`, origins in index order.
pub fn legal_moves(board: &mut Board, side: Side, rules: &RulesConfig) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for from in 0..64u8 {
        if owned_by(board.piece_at(from), side) {
            out.extend(legal_destinations(board, from, rules).iter().map(|to| Move::new(from, to)));
        }
    }
    out
}

/// Moves that keep the mover's own king out of check.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckFilteredGenerator {
    pub rules: RulesConfig,
}

impl MoveGenerator for CheckFilteredGenerator {
    fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    fn generate_moves(&self, board: &mut Board, side: Side) -> Vec<Move> {
        legal_moves(board, side, &self.rules)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::chess_rules::starting_board;
    use crate::game_state::chess_types::{Piece, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::utils::random_mover::choose_random_move;

    #[test]
    fn start_position_has_twenty_legal_moves() {
        let mut board = starting_board();
        let rules = RulesConfig::default();
        assert!(has_legal_moves(&mut board, Side::White, &rules));
        assert_eq!(legal_moves(&mut board, Side::White, &rules).len(), 20);
    }

    #[test]
    fn pinned_rook_keeps_only_file_moves() {
        let mut board = Board::empty();
        board.put(60, Piece::white(PieceKind::King));
        board.put(52, Piece::white(PieceKind::Rook));
        board.put(4, Piece::black(PieceKind::Rook));
        let rules = RulesConfig::default();
        let moves = legal_destinations(&mut board, 52, &rules);
        assert_eq!(moves.to_vec(), vec![4, 12, 20, 28, 36, 44]);
    }

    #[test]
    fn back_rank_mate_has_no_escape() {
        // Black king h8, pawns g7 h7, white rook delivers mate on e8.
        let state = GameState::from_fen("4R2k/6pp/8/8/8/8/8/6K1 b - - 0 1").expect("valid FEN");
        let mut board = state.board;
        let rules = RulesConfig::default();
        assert!(is_king_in_check(&board, Side::Black, &rules));
        assert!(!has_legal_moves(&mut board, Side::Black, &rules));
        assert_eq!(board, state.board);
    }

    #[test]
    fn stalemated_king_has_no_moves_and_no_check() {
        // Black king a8, white queen b6, white king c1.
        let state = GameState::from_fen("k7/8/1Q6/8/8/8/8/2K5 b - - 0 1").expect("valid FEN");
        let mut board = state.board;
        let rules = RulesConfig::default();
        assert!(!is_king_in_check(&board, Side::Black, &rules));
        assert!(!has_legal_moves(&mut board, Side::Black, &rules));
    }

    #[test]
    fn mobility_scan_leaves_mid_game_boards_untouched() {
        let rules = RulesConfig::default();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _game in 0..8 {
            let mut state = GameState::new_game();
            for _ply in 0..40 {
                let before = state.board;
                let side = state.side_to_move;
                has_legal_moves(&mut state.board, side, &rules);
                has_legal_moves(&mut state.board, side.opposite(), &rules);
                legal_moves(&mut state.board, side, &rules);
                assert_eq!(state.board, before);

                let Some(mv) = choose_random_move(&mut state.board, side, &rules, &mut rng) else {
                    break;
                };
                apply_move(&mut state.board, mv);
                state.advance_turn();
            }
        }
    }

    #[test]
    fn check_filtered_generator_is_subset_of_pseudo_legal() {
        // Rook on a1 checks along the first rank; stepping along it stays in check.
        let mut board =
            GameState::from_fen("4k3/8/8/8/8/8/3P1P2/r3K3 w - - 0 1").expect("valid FEN").board;
        let rules = RulesConfig::default();
        let pseudo = crate::move_generation::move_generator::pseudo_legal_moves(
            &board,
            Side::White,
            &rules,
        );
        let legal = CheckFilteredGenerator { rules }.generate_moves(&mut board, Side::White);
        assert!(legal.iter().all(|mv| pseudo.contains(mv)));
        assert_eq!(legal, vec![Move::new(60, 52)]);
    }
}
