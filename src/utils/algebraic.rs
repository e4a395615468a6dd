//! Coordinate-notation conversions.
//!
//! Converts between human-readable coordinates (for example `e4`) and the
//! internal (row, column) squares, where row = 8 - rank digit and
//! column = file letter - 'a'. Reused by move parsing and rendering.

use crate::errors::ChessError;
use crate::game_state::chess_types::{PieceKind, Square};

/// Convert a file letter and rank digit (for example `'e'`, `'4'`) to a square.
#[inline]
pub fn parse_square_chars(file: char, rank: char) -> Result<Square, ChessError> {
    if !('a'..='h').contains(&file) {
        return Err(ChessError::InvalidCoordinateChar(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(ChessError::InvalidCoordinateChar(rank));
    }

    let col = file as i8 - 'a' as i8;
    let row = 8 - (rank as i8 - '0' as i8);
    Ok((row, col))
}

/// Convert coordinate notation (for example `"e4"`) to a square.
pub fn parse_square(text: &str) -> Result<Square, ChessError> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessError::NotationTooShort(text.to_owned()));
    };
    parse_square_chars(file, rank)
}

/// Convert a square back to coordinate notation. The square must be on the
/// board; moves and board queries never hold off-board squares.
pub fn square_to_algebraic(square: Square) -> String {
    let (row, col) = square;
    let file = char::from(b'a' + col as u8);
    let rank = char::from(b'0' + (8 - row) as u8);
    format!("{file}{rank}")
}

/// Promotion piece kind selected by a trailing notation letter.
///
/// Case-insensitive; anything other than r/n/b reads as a queen.
pub fn promotion_kind(letter: char) -> PieceKind {
    match letter.to_ascii_lowercase() {
        'r' => PieceKind::Rook,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        _ => PieceKind::Queen,
    }
}
