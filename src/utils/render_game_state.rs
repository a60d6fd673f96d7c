//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 (Black's back rank, rank 8) is printed first, so White sits at the
//! bottom exactly as in the starting diagram.

use crate::game_state::board::{Board, SquareSet};
use crate::game_state::game_state::GameState;

pub fn render_game_state(game_state: &GameState) -> String {
    render_board(&game_state.board, SquareSet::EMPTY)
}

/// Render `board`, marking every square in `highlight` with `*` when empty
/// and brackets when occupied.
pub fn render_board(board: &Board, highlight: SquareSet) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for row in 0..8u8 {
        let rank = char::from(b'8' - row);
        out.push(rank);
        out.push(' ');

        for col in 0..8u8 {
            let square = row * 8 + col;
            let marked = highlight.contains(square);
            match (board.piece_at(square), marked) {
                (Some(piece), true) => {
                    out.push('[');
                    out.push(piece.glyph());
                    out.push(']');
                }
                (Some(piece), false) => {
                    out.push(' ');
                    out.push(piece.glyph());
                    out.push(' ');
                }
                (None, true) => out.push_str(" * "),
                (None, false) => out.push_str(" · "),
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_renders_black_on_top() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with("8  ♜  ♞  ♝  ♛  ♚"));
        assert!(lines[8].starts_with("1  ♖  ♘  ♗  ♕  ♔"));
        assert!(lines[4].contains('·'));
    }

    #[test]
    fn highlighted_squares_are_marked() {
        let game = GameState::new_game();
        let highlight: SquareSet = [44u8, 36, 60].into_iter().collect();
        let rendered = render_board(&game.board, highlight);
        assert!(rendered.contains("[♔]"));
        assert_eq!(rendered.matches(" * ").count(), 2);
    }
}
