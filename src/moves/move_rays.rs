//! Shared stepping and sliding helpers for the mailbox move generators.
//!
//! Leapers (knight, king) use const target tables built from their offsets.
//! Sliders walk each ray outward until the edge or the first occupied square.

use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_types::{owned_by, square_at, square_col, square_row, Side, Square};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Per-square mask of on-board squares reachable by one `(d_row, d_col)` jump.
pub const fn leaper_table(offsets: &[(i8, i8); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i8;
        let col = (sq % 8) as i8;
        let mut targets = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            let r = row + offsets[i].0;
            let c = col + offsets[i].1;
            if r >= 0 && r < 8 && c >= 0 && c < 8 {
                targets |= 1u64 << (r as usize * 8 + c as usize);
            }
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

/// Keep every target that is empty or holds an enemy of `side`.
#[inline]
pub fn step_targets(board: &Board, targets: u64, side: Side) -> SquareSet {
    SquareSet::from_bits(targets)
        .iter()
        .filter(|&to| !owned_by(board.piece_at(to), side))
        .collect()
}

/// Walk every ray in `directions` from `from`. Empty squares are collected and
/// the walk continues; the first occupied square ends the ray and is collected
/// only when it holds an enemy.
pub fn slide_targets(
    board: &Board,
    from: Square,
    side: Side,
    directions: &[(i8, i8)],
) -> SquareSet {
    let mut out = SquareSet::EMPTY;
    let row = square_row(from) as i8;
    let col = square_col(from) as i8;

    for &(d_row, d_col) in directions {
        let mut r = row + d_row;
        let mut c = col + d_col;

        while let Some(to) = square_at(r, c) {
            match board.piece_at(to) {
                None => out.insert(to),
                Some(piece) => {
                    if !piece.belongs_to(side) {
                        out.insert(to);
                    }
                    break;
                }
            }
            r += d_row;
            c += d_col;
        }
    }

    out
}
