//! Rook candidate-move generation: the four orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::{generate_ray_moves, Move};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(board: &Board, origin: Square, out: &mut Vec<Move>) {
    let Some(piece) = board.piece_at(origin) else {
        return;
    };
    generate_ray_moves(board, origin, piece, &ROOK_DIRECTIONS, out);
}
