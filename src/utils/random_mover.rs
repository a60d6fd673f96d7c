//! Uniform random move selection over check-filtered moves.
//!
//! Used by the terminal `random` command and by seeded tests that need
//! arbitrary mid-game positions.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::{Move, Side};
use crate::move_generation::legal_move_generator::legal_moves;

/// A uniformly chosen move that keeps `side`'s king safe, or `None` when the
/// side has no such move (checkmate or stalemate).
pub fn choose_random_move<R: Rng + ?Sized>(
    board: &mut Board,
    side: Side,
    rules: &RulesConfig,
    rng: &mut R,
) -> Option<Move> {
    let moves = legal_moves(board, side, rules);
    moves.as_slice().choose(rng).copied()
}
