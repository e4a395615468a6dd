//! Knight candidate-move generation: the eight fixed jump offsets,
//! filtered to board bounds and non-friendly destinations.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_square, Square};
use crate::moves::move_descriptions::Move;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(board: &Board, origin: Square, out: &mut Vec<Move>) {
    let Some(piece) = board.piece_at(origin) else {
        return;
    };

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        let Ok(target) = offset_square(origin, d_row, d_col) else {
            continue;
        };
        match board.piece_at(target) {
            None => out.push(Move::new(origin, target, piece, None)),
            Some(occupant) if occupant.color != piece.color => {
                out.push(Move::new(origin, target, piece, Some(occupant)));
            }
            Some(_) => {}
        }
    }
}
