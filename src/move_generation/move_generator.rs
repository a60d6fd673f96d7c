//! Per-piece move generation entry points and the generator trait.
//!
//! `generate` is the single dispatch over piece kinds. Its output is
//! pseudo-legal: nothing here checks whether the mover's king ends up attacked.

use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::{Move, Piece, PieceKind, Side, Square};
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

/// Pseudo-legal destinations for `piece` standing on `square`.
///
/// The caller guarantees `square` holds `piece`.
pub fn generate(board: &Board, square: Square, piece: Piece, rules: &RulesConfig) -> SquareSet {
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, square, piece.side, rules.pawn_captures),
        PieceKind::Knight => knight_moves(board, square, piece.side),
        PieceKind::Bishop => bishop_moves(board, square, piece.side),
        PieceKind::Rook => rook_moves(board, square, piece.side),
        PieceKind::Queen => queen_moves(board, square, piece.side),
        PieceKind::King => king_moves(board, square, piece.side),
    }
}

/// Pseudo-legal destinations for whatever occupies `square`; empty for an empty square.
pub fn destinations_from(board: &Board, square: Square, rules: &RulesConfig) -> SquareSet {
    match board.piece_at(square) {
        Some(piece) => generate(board, square, piece, rules),
        None => SquareSet::EMPTY,
    }
}

/// Every pseudo-legal move for `side`, origins in index order.
pub fn pseudo_legal_moves(board: &Board, side: Side, rules: &RulesConfig) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, piece) in board.pieces_of(side) {
        out.extend(generate(board, from, piece, rules).iter().map(|to| Move::new(from, to)));
    }
    out
}

/// Source of candidate moves for a side. Takes the board mutably so
/// implementations may run trial moves; every implementation must hand the
/// board back unchanged.
pub trait MoveGenerator {
    fn rules(&self) -> &RulesConfig;

    fn generate_moves(&self, board: &mut Board, side: Side) -> Vec<Move>;
}

/// Movement patterns only.
#[derive(Debug, Clone, Copy, Default)]
pub struct PseudoLegalGenerator {
    pub rules: RulesConfig,
}

impl MoveGenerator for PseudoLegalGenerator {
    fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    fn generate_moves(&self, board: &mut Board, side: Side) -> Vec<Move> {
        pseudo_legal_moves(board, side, &self.rules)
    }
}
