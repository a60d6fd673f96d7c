//! Game state: the board plus the turn controller.
//!
//! `GameState` is the only mutable model in the engine. Accepted moves mutate
//! it in place; a reset replaces it wholesale with `new_game()`.

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::starting_board;
use crate::game_state::chess_types::Side;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Side,
    /// Accepted half-moves since the state was created.
    pub ply: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl GameState {
    /// Empty board, White to move. Used as the base for FEN parsing and tests.
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Side::White,
            ply: 0,
        }
    }

    /// Standard starting layout, White to move.
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            side_to_move: Side::White,
            ply: 0,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Turn controller transition: flip the side to move. Called exactly once
    /// per accepted move.
    #[inline]
    pub fn advance_turn(&mut self) {
        self.side_to_move = self.side_to_move.opposite();
        self.ply = self.ply.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::Side;

    #[test]
    fn new_game_starts_with_white_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.side_to_move, Side::White);
        assert_eq!(game.ply, 0);
        assert_eq!(game.board.piece_count(), 32);
    }

    #[test]
    fn advance_turn_alternates_sides() {
        let mut game = GameState::new_game();
        game.advance_turn();
        assert_eq!(game.side_to_move, Side::Black);
        game.advance_turn();
        assert_eq!(game.side_to_move, Side::White);
        assert_eq!(game.ply, 2);
    }
}
