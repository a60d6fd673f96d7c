//! Square name conversions.
//!
//! Converts between coordinates such as `e2` and square indices. Row 0 is
//! rank 8, so `a8 == 0`, `h8 == 7`, `a1 == 56` and `h1 == 63`.

use crate::chess_errors::ChessError;
use crate::game_state::chess_types::{square_col, square_row, Square};

/// Convert a square name (for example: "e2") to a square index.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(square.to_owned()));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Ok(row * 8 + col)
}

/// Convert a square index (`0..=63`) to its name (for example: "e2").
pub fn square_to_algebraic(square: Square) -> Result<String, ChessError> {
    if square > 63 {
        return Err(ChessError::InvalidSquare(format!("index {square} is off the board")));
    }

    let file_char = char::from(b'a' + square_col(square));
    let rank_char = char::from(b'8' - square_row(square));
    Ok(format!("{file_char}{rank_char}"))
}

/// Accept either a square name or a raw index (`"e2"` or `"52"`).
pub fn parse_square(token: &str) -> Result<Square, ChessError> {
    if let Ok(index) = token.parse::<u8>() {
        return if index < 64 {
            Ok(index)
        } else {
            Err(ChessError::InvalidSquare(format!("index {index} is off the board")))
        };
    }
    algebraic_to_square(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_expected_indices() {
        assert_eq!(algebraic_to_square("a8").expect("a8"), 0);
        assert_eq!(algebraic_to_square("h8").expect("h8"), 7);
        assert_eq!(algebraic_to_square("a1").expect("a1"), 56);
        assert_eq!(algebraic_to_square("h1").expect("h1"), 63);
    }

    #[test]
    fn e2_e4_is_52_to_36() {
        assert_eq!(algebraic_to_square("e2").expect("e2"), 52);
        assert_eq!(algebraic_to_square("E4").expect("E4"), 36);
        assert_eq!(square_to_algebraic(52).expect("52"), "e2");
        assert_eq!(square_to_algebraic(36).expect("36"), "e4");
    }

    #[test]
    fn parse_square_accepts_names_and_indices() {
        assert_eq!(parse_square("52").expect("index"), 52);
        assert_eq!(parse_square("e2").expect("name"), 52);
        assert!(parse_square("64").is_err());
        assert!(parse_square("i1").is_err());
        assert!(parse_square("e9").is_err());
        assert!(square_to_algebraic(64).is_err());
    }
}
