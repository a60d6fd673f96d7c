//! GameState-to-FEN serializer.
//!
//! Castling and en-passant fields are always `-` and the halfmove clock is
//! always `0`; the fullmove number is derived from the ply counter.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Side;
use crate::game_state::game_state::GameState;

pub fn generate_fen(game_state: &GameState) -> String {
    let side = match game_state.side_to_move {
        Side::White => 'w',
        Side::Black => 'b',
    };
    let fullmove = game_state.ply / 2 + 1;
    format!("{} {side} - - 0 {fullmove}", generate_placement(&game_state.board))
}

/// Placement field only, rank 8 (row 0) first.
pub fn generate_placement(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for row in 0..8u8 {
        let mut empty_run = 0u8;

        for col in 0..8u8 {
            match board.piece_at(row * 8 + col) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}
