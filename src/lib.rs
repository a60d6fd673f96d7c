//! Crate root module declarations for the Plum rules core.
//!
//! Exposes the board model, per-piece move patterns, check and mobility
//! detection, the game facade with its move log, the terminal front-end, and
//! the FEN/rendering helpers so the binary, tests, and benches share one set
//! of module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_rays;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod game {
    pub mod chess_game;
    pub mod move_log;
}

pub mod terminal {
    pub mod terminal_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_mover;
    pub mod render_game_state;
}
