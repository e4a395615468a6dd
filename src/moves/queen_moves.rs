//! Queen candidate-move generation: the union of the rook and bishop ray
//! sets from the same square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_descriptions::{generate_ray_moves, Move};
use crate::moves::rook_moves::ROOK_DIRECTIONS;

pub fn generate_queen_moves(board: &Board, origin: Square, out: &mut Vec<Move>) {
    let Some(piece) = board.piece_at(origin) else {
        return;
    };
    generate_ray_moves(board, origin, piece, &ROOK_DIRECTIONS, out);
    generate_ray_moves(board, origin, piece, &BISHOP_DIRECTIONS, out);
}
