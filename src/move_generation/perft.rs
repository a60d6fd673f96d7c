//! Perft node counting over any `MoveGenerator`.
//!
//! Moves are played as nested `TrialMove`s on one board, so a perft run never
//! clones positions and always returns the board it was given.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Side};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::TrialMove;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_moves, CheckFilteredGenerator};
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }
    let side = game_state.side_to_move;
    perft_recurse(generator, &mut game_state.board, side, depth)
}

/// Perft with the default rule set and check-filtered moves.
pub fn perft_legal(game_state: &mut GameState, depth: u8) -> PerftCounts {
    perft(&CheckFilteredGenerator::default(), game_state, depth)
}

/// Per-root-move node counts, for comparing against other move generators.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &mut GameState,
    depth: u8,
) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }
    let side = game_state.side_to_move;
    let board = &mut game_state.board;
    let moves = generator.generate_moves(board, side);
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let mut trial = TrialMove::new(board, mv);
        let nodes = if depth == 1 {
            1
        } else {
            perft_recurse(generator, trial.board_mut(), side.opposite(), depth - 1).nodes
        };
        out.push((mv, nodes));
    }
    out
}

fn perft_recurse<G: MoveGenerator>(generator: &G, board: &mut Board, side: Side, depth: u8) -> PerftCounts {
    let moves = generator.generate_moves(board, side);
    let mut total = PerftCounts::default();

    for mv in moves {
        let mut trial = TrialMove::new(board, mv);
        if depth == 1 {
            total.nodes += 1;
            if trial.captured().is_some() {
                total.captures += 1;
            }
            let rules = generator.rules();
            if is_king_in_check(trial.board(), side.opposite(), rules) {
                total.checks += 1;
                if !has_legal_moves(trial.board_mut(), side.opposite(), rules) {
                    total.checkmates += 1;
                }
            }
        } else {
            total.merge(perft_recurse(generator, trial.board_mut(), side.opposite(), depth - 1));
        }
    }

    total
}
