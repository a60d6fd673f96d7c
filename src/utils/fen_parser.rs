//! FEN-to-GameState parser.
//!
//! Reads the piece placement and side-to-move fields. Castling and en-passant
//! fields are syntax-checked and dropped because neither rule exists here; the
//! fullmove number seeds the ply counter.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{square_at, Piece, Side};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing board layout".to_owned()))?;
    let side_part = parts
        .next()
        .ok_or_else(|| ChessError::InvalidFen("missing side-to-move".to_owned()))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(ChessError::InvalidFen("extra trailing fields".to_owned()));
    }

    let mut game_state = GameState::new_empty();
    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    check_castling_field(castling_part)?;
    check_en_passant_field(en_passant_part)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove = fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessError::InvalidFen(format!("invalid fullmove number: {fullmove_part}")))?;

    let black_offset = u16::from(game_state.side_to_move == Side::Black);
    game_state.ply = fullmove
        .saturating_sub(1)
        .saturating_mul(2)
        .saturating_add(black_offset);

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessError> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != 8 {
        return Err(ChessError::InvalidFen(
            "board layout must contain 8 ranks".to_owned(),
        ));
    }

    // First FEN rank is rank 8, which is row 0 here.
    for (row, row_str) in rows.iter().enumerate() {
        let mut col = 0usize;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessError::InvalidFen(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch).ok_or_else(|| {
                ChessError::InvalidFen(format!("invalid piece character '{ch}'"))
            })?;
            let square = square_at(row as i8, col as i8)
                .ok_or_else(|| ChessError::InvalidFen("rank has too many files".to_owned()))?;
            game_state.board.put(square, piece);
            col += 1;
        }

        if col != 8 {
            return Err(ChessError::InvalidFen(format!(
                "rank {} does not sum to 8 files",
                8 - row
            )));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Side, ChessError> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(ChessError::InvalidFen(format!(
            "invalid side-to-move field: {side_part}"
        ))),
    }
}

fn check_castling_field(castling_part: &str) -> Result<(), ChessError> {
    if castling_part == "-" || castling_part.chars().all(|ch| "KQkq".contains(ch)) {
        Ok(())
    } else {
        Err(ChessError::InvalidFen(format!(
            "invalid castling field: {castling_part}"
        )))
    }
}

fn check_en_passant_field(en_passant_part: &str) -> Result<(), ChessError> {
    if en_passant_part == "-" {
        return Ok(());
    }
    algebraic_to_square(en_passant_part)
        .map(|_| ())
        .map_err(|_| ChessError::InvalidFen(format!("invalid en-passant field: {en_passant_part}")))
}
