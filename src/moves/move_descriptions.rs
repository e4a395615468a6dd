//! The move value type shared by parsing, generation, and make/unmake.
//!
//! A `Move` records everything `undo_move` needs to restore the board:
//! both squares, the piece that moved, and the piece (if any) that stood on
//! the destination. The special-move booleans are not stored; they are
//! derived from piece kind and geometry so that make and undo agree.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_square, Piece, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    /// Occupant of `start` before execution.
    pub piece_moved: Piece,
    /// Occupant of `end` before execution, if any.
    pub piece_captured: Option<Piece>,
    /// Promotion choice from notation; `None` defaults to a queen when the
    /// move reaches the farthest rank.
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(
        start: Square,
        end: Square,
        piece_moved: Piece,
        piece_captured: Option<Piece>,
    ) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            promotion: None,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// A king moving two files is castling.
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.piece_moved.kind == PieceKind::King && (self.end.1 - self.start.1).abs() == 2
    }

    /// A pawn moving diagonally with no recorded capture is en passant.
    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn
            && self.start.1 != self.end.1
            && self.piece_captured.is_none()
    }
}

impl fmt::Display for Move {
    /// Coordinate notation, for example `e2e4` or `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )?;
        if let Some(promotion) = self.promotion {
            let letter = match promotion {
                PieceKind::Rook => 'r',
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                _ => 'q',
            };
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}

/// Walk rays from `origin` in each direction, pushing a move per empty
/// square and stopping at the first occupied one (included as a capture
/// when the blocker is an enemy piece).
pub(crate) fn generate_ray_moves(
    board: &Board,
    origin: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_col) in directions {
        let mut current = origin;
        while let Ok(next) = offset_square(current, d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(Move::new(origin, next, piece, None)),
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(Move::new(origin, next, piece, Some(blocker)));
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
