//! Attack detection and check queries.
//!
//! A square counts as attacked when it appears in the pseudo-legal move set of
//! any piece of the attacking side. Every query rescans the whole board; there
//! is no cached attack map.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::move_generation::move_generator::generate;

#[inline]
pub fn king_square(board: &Board, side: Side) -> Option<Square> {
    board.find_king(side)
}

/// True when `side`'s king is attacked. A side without a king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, side: Side, rules: &RulesConfig) -> bool {
    let Some(king_sq) = king_square(board, side) else {
        return false;
    };
    is_square_attacked(board, king_sq, side.opposite(), rules)
}

/// True when some piece of `attacker` has `square` among its pseudo-legal
/// destinations.
///
/// Pawn pushes are part of a pawn's move set, so an empty square straight
/// ahead of a pawn counts as attacked. Occupied squares (such as a king's)
/// are only reachable by pawns diagonally.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Side, rules: &RulesConfig) -> bool {
    board
        .pieces_of(attacker)
        .any(|(from, piece)| generate(board, from, piece, rules).contains(square))
}

/// Every piece of `attacker` whose move set contains `square`.
pub fn attackers_to_square(
    board: &Board,
    square: Square,
    attacker: Side,
    rules: &RulesConfig,
) -> Vec<(Square, PieceKind)> {
    board
        .pieces_of(attacker)
        .filter(|(from, piece)| generate(board, *from, *piece, rules).contains(square))
        .map(|(from, piece)| (from, piece.kind))
        .collect()
}
