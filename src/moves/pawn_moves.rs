//! Pawn move generation: single and double pushes plus diagonal captures.
//!
//! There is no promotion and no en passant. A pawn on the far row simply has
//! no forward moves.

use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_rules::PawnCaptureRule;
use crate::game_state::chess_types::{square_col, square_row, Side, Square};

pub fn pawn_moves(board: &Board, from: Square, side: Side, rule: PawnCaptureRule) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let step = side.forward() as i16 * 8;

    if let Some(one) = offset_square(from, step) {
        if board.is_empty(one) {
            out.insert(one);

            if square_row(from) == side.pawn_start_row() {
                if let Some(two) = offset_square(from, step * 2) {
                    if board.is_empty(two) {
                        out.insert(two);
                    }
                }
            }
        }
    }

    out |= pawn_captures(board, from, side, rule);
    out
}

/// Diagonal-ahead squares currently holding an enemy piece.
pub fn pawn_captures(board: &Board, from: Square, side: Side, rule: PawnCaptureRule) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let ahead = side.forward() as i16 * 8;

    for delta in [ahead - 1, ahead + 1] {
        let Some(to) = offset_square(from, delta) else {
            continue;
        };
        if rule == PawnCaptureRule::EdgeChecked
            && square_col(to).abs_diff(square_col(from)) != 1
        {
            continue;
        }
        if board.piece_at(to).is_some_and(|p| !p.belongs_to(side)) {
            out.insert(to);
        }
    }

    out
}

#[inline]
fn offset_square(from: Square, delta: i16) -> Option<Square> {
    let to = from as i16 + delta;
    (0..64).contains(&to).then_some(to as Square)
}
