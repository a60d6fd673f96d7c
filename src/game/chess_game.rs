//! Game facade for a UI collaborator.
//!
//! `ChessGame` owns the only `GameState`, validates `(from, to)` requests,
//! applies accepted moves, flips the turn, and re-evaluates check and
//! mobility for the new side to move. Refused requests leave the state
//! untouched and come back as `MoveOutcome { accepted: false, .. }`.

use crate::chess_errors::ChessError;
use crate::game::move_log::{MoveLog, MoveRecord};
use crate::game_state::board::{Board, SquareSet};
use crate::game_state::chess_rules::{RulesConfig, SelfCheckPolicy};
use crate::game_state::chess_types::{Move, Piece, Side, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, leaves_king_in_check};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_moves, legal_destinations};
use crate::move_generation::move_generator::{destinations_from, generate};

/// Why a move request was refused. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The origin square holds no piece.
    EmptySquare,
    /// The origin piece belongs to the side not on move.
    NotSideToMove,
    /// The destination is not in the piece's move set.
    UnreachableSquare,
    /// Only under `SelfCheckPolicy::Reject`: the move exposes the mover's king.
    LeavesKingInCheck,
    /// The game already ended in checkmate or stalemate.
    GameOver,
}

impl RejectReason {
    pub const fn describe(self) -> &'static str {
        match self {
            RejectReason::EmptySquare => "no piece on origin square",
            RejectReason::NotSideToMove => "piece belongs to the side not on move",
            RejectReason::UnreachableSquare => "destination not reachable by that piece",
            RejectReason::LeavesKingInCheck => "move leaves own king in check",
            RejectReason::GameOver => "game is over",
        }
    }
}

/// Status of the side to move, derived from the check and mobility queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Side },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    #[inline]
    pub fn in_check(self) -> bool {
        matches!(self, GameStatus::Check | GameStatus::Checkmate { .. })
    }
}

/// Result of one `apply_move` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub accepted: bool,
    pub side_to_move: Side,
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub winning_side: Option<Side>,
    /// Piece removed from the destination, when the move was a capture.
    pub captured: Option<Piece>,
    pub rejection: Option<RejectReason>,
}

impl MoveOutcome {
    fn from_status(side_to_move: Side, status: GameStatus) -> Self {
        let winning_side = match status {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        };
        Self {
            accepted: true,
            side_to_move,
            in_check: status.in_check(),
            checkmate: winning_side.is_some(),
            stalemate: status == GameStatus::Stalemate,
            winning_side,
            captured: None,
            rejection: None,
        }
    }
}

/// Classify the position for the side to move.
pub fn evaluate_status(state: &mut GameState, rules: &RulesConfig) -> GameStatus {
    let side = state.side_to_move;
    let in_check = is_king_in_check(&state.board, side, rules);
    let can_move = has_legal_moves(&mut state.board, side, rules);
    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate {
            winner: side.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Ongoing,
    }
}

#[derive(Debug, Clone)]
pub struct ChessGame {
    state: GameState,
    rules: RulesConfig,
    status: GameStatus,
    log: MoveLog,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new(RulesConfig::default())
    }
}

impl ChessGame {
    pub fn new(rules: RulesConfig) -> Self {
        Self {
            state: Self::initial_state(),
            rules,
            status: GameStatus::Ongoing,
            log: MoveLog::new(),
        }
    }

    /// Start from an arbitrary position; the status is evaluated immediately.
    pub fn from_state(mut state: GameState, rules: RulesConfig) -> Self {
        let status = evaluate_status(&mut state, &rules);
        Self {
            state,
            rules,
            status,
            log: MoveLog::new(),
        }
    }

    pub fn from_fen(fen: &str, rules: RulesConfig) -> Result<Self, ChessError> {
        Ok(Self::from_state(GameState::from_fen(fen)?, rules))
    }

    /// Standard starting layout, White to move.
    pub fn initial_state() -> GameState {
        GameState::new_game()
    }

    /// Replace the state wholesale with a fresh game. Rules are kept.
    pub fn reset(&mut self) {
        self.state = Self::initial_state();
        self.status = GameStatus::Ongoing;
        self.log.clear();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn side_to_move(&self) -> Side {
        self.state.side_to_move
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }

    /// Pseudo-legal destinations for whatever occupies `square`.
    pub fn legal_destinations(&self, square: Square) -> SquareSet {
        destinations_from(&self.state.board, square, &self.rules)
    }

    /// Destinations that do not expose the mover's king.
    pub fn safe_destinations(&mut self, square: Square) -> SquareSet {
        legal_destinations(&mut self.state.board, square, &self.rules)
    }

    /// Destinations `apply_move` would accept from `square` right now.
    pub fn playable_destinations(&mut self, square: Square) -> SquareSet {
        if self.status.is_terminal() {
            return SquareSet::EMPTY;
        }
        match self.state.board.piece_at(square) {
            Some(piece) if piece.belongs_to(self.state.side_to_move) => match self.rules.self_check {
                SelfCheckPolicy::Permit => self.legal_destinations(square),
                SelfCheckPolicy::Reject => self.safe_destinations(square),
            },
            _ => SquareSet::EMPTY,
        }
    }

    pub fn is_in_check(&self, side: Side) -> bool {
        is_king_in_check(&self.state.board, side, &self.rules)
    }

    pub fn has_legal_moves(&mut self, side: Side) -> bool {
        has_legal_moves(&mut self.state.board, side, &self.rules)
    }

    /// Validate and play `from -> to` for the side to move.
    ///
    /// Under `SelfCheckPolicy::Permit` a move that leaves the mover's own king
    /// attacked is accepted; only the opponent's mobility test filters such
    /// moves.
    ///
    /// Once the status is checkmate or stalemate every request is refused with
    /// `RejectReason::GameOver`, under either self-check policy. This is
    /// stricter than the pseudo-legal check alone: a stalemated side would
    /// otherwise still have pattern moves to play.
    pub fn apply_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if let Err(reason) = self.check_request(from, to) {
            return self.rejected(reason);
        }

        // `check_request` guarantees an own piece on `from`.
        let Some(piece) = self.state.board.piece_at(from) else {
            return self.rejected(RejectReason::EmptySquare);
        };
        let mover = self.state.side_to_move;
        let captured = apply_move(&mut self.state.board, Move::new(from, to));
        self.state.advance_turn();

        self.log.push(MoveRecord {
            ply: self.state.ply,
            side: mover,
            piece,
            from,
            to,
            captured,
            played_at: chrono::Local::now(),
        });

        self.status = evaluate_status(&mut self.state, &self.rules);
        MoveOutcome {
            captured,
            ..MoveOutcome::from_status(self.state.side_to_move, self.status)
        }
    }

    fn check_request(&mut self, from: Square, to: Square) -> Result<(), RejectReason> {
        if self.status.is_terminal() {
            return Err(RejectReason::GameOver);
        }

        let side = self.state.side_to_move;
        let piece = self
            .state
            .board
            .piece_at(from)
            .ok_or(RejectReason::EmptySquare)?;
        if !piece.belongs_to(side) {
            return Err(RejectReason::NotSideToMove);
        }
        if !generate(&self.state.board, from, piece, &self.rules).contains(to) {
            return Err(RejectReason::UnreachableSquare);
        }
        if self.rules.self_check == SelfCheckPolicy::Reject
            && leaves_king_in_check(&mut self.state.board, Move::new(from, to), side, &self.rules)
        {
            return Err(RejectReason::LeavesKingInCheck);
        }
        Ok(())
    }

    fn rejected(&self, reason: RejectReason) -> MoveOutcome {
        MoveOutcome {
            accepted: false,
            rejection: Some(reason),
            ..MoveOutcome::from_status(self.state.side_to_move, self.status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn new_game_is_ongoing_with_white_to_move() {
        let game = ChessGame::default();
        assert_eq!(game.status(), GameStatus::Ongoing);
        assert_eq!(game.side_to_move(), Side::White);
        assert!(!game.is_in_check(Side::White));
        assert!(!game.is_in_check(Side::Black));
    }

    #[test]
    fn accepted_move_flips_turn_and_logs() {
        let mut game = ChessGame::default();
        let outcome = game.apply_move(52, 36);
        assert!(outcome.accepted);
        assert_eq!(outcome.side_to_move, Side::Black);
        assert!(!outcome.in_check);
        assert_eq!(game.board().piece_at(36), Some(Piece::white(PieceKind::Pawn)));
        assert!(game.board().is_empty(52));
        assert_eq!(game.move_log().len(), 1);
        assert_eq!(game.move_log().records()[0].notation(), "♙ 52→36");
    }

    #[test]
    fn refusals_leave_state_unchanged() {
        let mut game = ChessGame::default();
        let before = game.state().clone();

        let empty = game.apply_move(36, 28);
        assert_eq!(empty.rejection, Some(RejectReason::EmptySquare));

        let wrong_side = game.apply_move(12, 28);
        assert_eq!(wrong_side.rejection, Some(RejectReason::NotSideToMove));

        let unreachable = game.apply_move(52, 28);
        assert_eq!(unreachable.rejection, Some(RejectReason::UnreachableSquare));

        for outcome in [empty, wrong_side, unreachable] {
            assert!(!outcome.accepted);
            assert_eq!(outcome.side_to_move, Side::White);
        }
        assert_eq!(game.state(), &before);
        assert!(game.move_log().is_empty());
    }

    #[test]
    fn capture_is_reported_in_outcome() {
        let mut game = ChessGame::default();
        assert!(game.apply_move(52, 36).accepted);
        assert!(game.apply_move(11, 27).accepted);
        let outcome = game.apply_move(36, 27);
        assert!(outcome.accepted);
        assert_eq!(outcome.captured, Some(Piece::black(PieceKind::Pawn)));
    }

    #[test]
    fn playable_destinations_follow_turn_and_policy() {
        let mut game = ChessGame::default();
        assert_eq!(game.playable_destinations(52).len(), 2);
        assert!(game.playable_destinations(12).is_empty());
        assert_eq!(game.legal_destinations(12).len(), 2);
    }

    #[test]
    fn reset_restores_initial_state_and_clears_log() {
        let mut game = ChessGame::new(RulesConfig::strict());
        game.apply_move(52, 36);
        game.apply_move(12, 28);
        game.reset();
        assert_eq!(game.state(), &GameState::new_game());
        assert!(game.move_log().is_empty());
        assert_eq!(game.rules(), &RulesConfig::strict());
    }
}
