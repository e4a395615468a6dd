//! Pluggable board evaluation interface and the baseline material scorer.
//!
//! Search delegates static position scoring to the `BoardScorer` trait so
//! alternate heuristics can be swapped without altering search code. All
//! scores are on the absolute scale: positive favors White.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};

/// Sentinel magnitude for a checkmated side; dominates any material total.
pub const MATE_SCORE: i32 = 99_999;

pub trait BoardScorer {
    /// Score on the absolute white-positive scale.
    fn score(&self, board: &Board) -> i32;
}

/// Fixed material values summed over the occupancy, white minus black.
/// No positional, mobility, or king-safety term. O(64), side-effect-free.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board) -> i32 {
        let mut total = 0i32;
        for row in 0..8i8 {
            for col in 0..8i8 {
                let Some(piece) = board.piece_at((row, col)) else {
                    continue;
                };
                let value = Self::piece_value(piece.kind);
                match piece.color {
                    Color::White => total += value,
                    Color::Black => total -= value,
                }
            }
        }
        total
    }
}
