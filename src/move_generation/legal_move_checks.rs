//! Check, checkmate, and stalemate derivation.
//!
//! A side is in check when some pseudo-legal enemy move lands on its king
//! square. Checkmate and stalemate both mean "no legal moves"; they differ
//! only in whether the side to move is in check.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::{generate_legal_moves, generate_pseudo_legal_moves};

/// True when some pseudo-legal move of the opposing color lands on
/// `color`'s king square. A board without that king reads as not in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let Some(king_square) = board.find_king(color) else {
        return false;
    };

    generate_pseudo_legal_moves(board, color.opposite())
        .iter()
        .any(|mv| mv.end == king_square)
}

/// In check with no legal moves.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    generate_legal_moves(board, color).is_empty()
}

/// Not in check, but no legal moves either.
pub fn is_stalemate(board: &mut Board, color: Color) -> bool {
    if is_in_check(board, color) {
        return false;
    }
    generate_legal_moves(board, color).is_empty()
}
