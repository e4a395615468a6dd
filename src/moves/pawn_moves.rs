//! Pawn candidate-move generation.
//!
//! Pushes, double pushes from the home row, and diagonal captures. This
//! generator never emits an en-passant destination even when the board has
//! a live target; an en-passant capture only happens when the caller
//! constructs a move onto the target square directly.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_square, Square};
use crate::moves::move_descriptions::Move;

pub fn generate_pawn_moves(board: &Board, origin: Square, out: &mut Vec<Move>) {
    let Some(piece) = board.piece_at(origin) else {
        return;
    };
    let direction = piece.color.pawn_direction();

    // Forward pushes onto empty squares only.
    if let Ok(forward) = offset_square(origin, direction, 0) {
        if board.piece_at(forward).is_none() {
            out.push(Move::new(origin, forward, piece, None));

            if origin.0 == piece.color.pawn_home_row() {
                if let Ok(two_forward) = offset_square(origin, 2 * direction, 0) {
                    if board.piece_at(two_forward).is_none() {
                        out.push(Move::new(origin, two_forward, piece, None));
                    }
                }
            }
        }
    }

    // Diagonal captures onto enemy-occupied squares.
    for d_col in [-1, 1] {
        if let Ok(target) = offset_square(origin, direction, d_col) {
            if let Some(victim) = board.piece_at(target) {
                if victim.color != piece.color {
                    out.push(Move::new(origin, target, piece, Some(victim)));
                }
            }
        }
    }
}
