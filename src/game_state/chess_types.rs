//! Core board-state value types.
//!
//! Squares are (row, column) pairs with row 0 at the black back rank and
//! row 7 at the white back rank, matching the rank display of the text
//! renderer. Pieces are plain tagged values; all piece-kind dispatch in the
//! engine inspects the `PieceKind` discriminant directly.

use crate::errors::ChessError;
use crate::game_state::chess_rules::{
    BLACK_BACK_ROW, BLACK_PAWN_ROW, WHITE_BACK_ROW, WHITE_PAWN_ROW,
};

/// A (row, column) pair, each in `0..=7`.
pub type Square = (i8, i8);

/// Offset a square by a row and column delta, failing off-board.
#[inline]
pub fn offset_square(x: Square, d_row: i8, d_col: i8) -> Result<Square, ChessError> {
    let y: Square = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(ChessError::OffsetLeavesBoard(x, d_row, d_col))
    } else {
        Ok(y)
    }
}

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White pawns move toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color starts on.
    #[inline]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Color::White => WHITE_PAWN_ROW,
            Color::Black => BLACK_PAWN_ROW,
        }
    }

    /// Farthest row for a pawn of this color; reaching it promotes.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => BLACK_BACK_ROW,
            Color::Black => WHITE_BACK_ROW,
        }
    }

    /// Row the pieces of this color start on.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => WHITE_BACK_ROW,
            Color::Black => BLACK_BACK_ROW,
        }
    }
}

/// Piece kind (color is represented separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// A piece on the board. Immutable once created; promotion replaces the
/// occupant of a square rather than mutating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// ASCII letter for the text renderer: uppercase white, lowercase black.
    pub fn ascii_char(self) -> char {
        let symbol = match self.kind {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        };
        match self.color {
            Color::White => symbol,
            Color::Black => symbol.to_ascii_lowercase(),
        }
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;
