//! Mailbox board model.
//!
//! `Board` is a flat 64-cell array of optional pieces, indexed row-major with
//! row 0 at Black's back rank. `SquareSet` is the bitboard-style set used for
//! move-generation results.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

/// Ordered 64-cell container. At most one piece per square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// Contents of `square`; squares outside `0..=63` read as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Overwrite a cell. Writes outside the board are ignored.
    #[inline]
    pub fn set(&mut self, square: Square, cell: Option<Piece>) {
        if let Some(slot) = self.cells.get_mut(square as usize) {
            *slot = cell;
        }
    }

    #[inline]
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.set(square, Some(piece));
    }

    #[inline]
    pub fn clear(&mut self, square: Square) {
        self.set(square, None);
    }

    /// Every occupied square owned by `side`, in index order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(idx, cell)| match cell {
                Some(piece) if piece.belongs_to(side) => Some((idx as Square, *piece)),
                _ => None,
            })
    }

    /// First square holding `side`'s king, if any.
    pub fn find_king(&self, side: Side) -> Option<Square> {
        let king = Piece::new(PieceKind::King, side);
        self.cells
            .iter()
            .position(|cell| *cell == Some(king))
            .map(|idx| idx as Square)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            for col in 0..8 {
                let ch = self.cells[row * 8 + col].map_or('.', Piece::to_fen_char);
                write!(f, "{ch}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

/// Set of squares packed into a 64-bit mask (bit `n` = square `n`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub fn insert(&mut self, square: Square) {
        debug_assert!(square < 64);
        self.0 |= 1u64 << square;
    }

    #[inline]
    pub const fn contains(self, square: Square) -> bool {
        square < 64 && (self.0 >> square) & 1 != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }

    pub fn to_vec(self) -> Vec<Square> {
        self.iter().collect()
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for square in iter {
            set.insert(square);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = Square;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> SquareSetIter {
        self.iter()
    }
}

/// Ascending iterator over a [`SquareSet`].
#[derive(Debug, Clone)]
pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let square = self.0.trailing_zeros() as Square;
        self.0 &= self.0 - 1;
        Some(square)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SquareSetIter {}
