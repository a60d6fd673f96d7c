//! Canonical rule constants and the rule-set configuration.
//!
//! Holds the starting layout and the two switches that decide how the engine
//! treats pawn captures on the edge files and moves that expose the mover's
//! own king.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Side};

/// Standard starting position in Forsyth-Edwards Notation (FEN).
///
/// Castling and en-passant fields are always `-`; neither rule exists here.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Standard layout: Black on rows 0-1, White on rows 6-7.
pub fn starting_board() -> Board {
    let mut board = Board::empty();
    for (col, kind) in BACK_RANK.iter().enumerate() {
        let col = col as u8;
        board.put(col, Piece::new(*kind, Side::Black));
        board.put(8 + col, Piece::black(PieceKind::Pawn));
        board.put(48 + col, Piece::white(PieceKind::Pawn));
        board.put(56 + col, Piece::new(*kind, Side::White));
    }
    board
}

/// How diagonal pawn captures treat the a- and h-files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PawnCaptureRule {
    /// Capture square must sit on a column adjacent to the pawn's column.
    #[default]
    EdgeChecked,
    /// Raw `±7` / `±9` index offsets with no column check. A pawn on an edge
    /// file can then "capture" on the far edge of the neighbouring row.
    WrapAround,
}

/// Whether move acceptance refuses moves that leave the mover's king attacked.
///
/// The mobility test always filters such moves; this only governs
/// `apply_move`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelfCheckPolicy {
    #[default]
    Permit,
    Reject,
}

/// Rule switches shared by generation, attack detection and move acceptance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RulesConfig {
    pub pawn_captures: PawnCaptureRule,
    pub self_check: SelfCheckPolicy,
}

impl RulesConfig {
    /// Bit-compatible with the browser original, edge defect included.
    pub const fn compatible() -> Self {
        Self {
            pawn_captures: PawnCaptureRule::WrapAround,
            self_check: SelfCheckPolicy::Permit,
        }
    }

    /// Both known defects corrected.
    pub const fn strict() -> Self {
        Self {
            pawn_captures: PawnCaptureRule::EdgeChecked,
            self_check: SelfCheckPolicy::Reject,
        }
    }
}
