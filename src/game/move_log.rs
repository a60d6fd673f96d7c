//! Ordered log of accepted moves.
//!
//! Each record keeps the raw origin/destination pair, the moving piece, the
//! piece found on the destination, and when the move was played.

use std::fmt;

use chrono::{DateTime, Local};

use crate::game_state::chess_types::{Piece, Side, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Half-move number, starting at 1.
    pub ply: u16,
    pub side: Side,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
    pub played_at: DateTime<Local>,
}

impl MoveRecord {
    /// `<glyph> <from>→<to>` with raw square indices.
    pub fn notation(&self) -> String {
        format!("{} {}→{}", self.piece.glyph(), self.from, self.to)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>3}. {}", self.ply, self.notation())?;
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.glyph())?;
        }
        write!(f, " ({})", self.played_at.format("%H:%M:%S"))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MoveLog {
    records: Vec<MoveRecord>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MoveRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }
}
