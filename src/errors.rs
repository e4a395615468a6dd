//! Errors used throughout the chess engine core.
//!
//! `ChessError` is the single error type returned by parsing and board
//! manipulation code. Every variant is an expected, recoverable failure
//! mode: callers (typically a game loop) match on it, report the move as
//! rejected, and re-prompt. Nothing in this enum is fatal.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for the chess engine core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// A move string had fewer than the four characters of coordinate
    /// notation (for example `"e2e"`).
    #[error("move notation too short: {0:?}")]
    NotationTooShort(String),

    /// A single character used during coordinate parsing was outside
    /// `a..=h` / `1..=8`.
    #[error("invalid coordinate character: {0:?}")]
    InvalidCoordinateChar(char),

    /// Offsetting a square by `(d_row, d_col)` would leave the board.
    ///
    /// Payload: (origin square, d_row, d_col).
    #[error("offset ({1}, {2}) from {0:?} leaves the board")]
    OffsetLeavesBoard(Square, i8, i8),

    /// The start square of a parsed move holds no piece.
    #[error("no piece on start square {0:?}")]
    NoPieceAtSquare(Square),

    /// The start square of a parsed move holds a piece of the wrong color.
    #[error("piece on start square {0:?} belongs to the opponent")]
    WrongColorAtSquare(Square),
}
