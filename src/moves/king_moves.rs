//! King candidate-move generation: the eight adjacent squares.
//!
//! This generator never emits a two-file castling move, whatever the
//! castling rights say; the board's castling execution runs only for a
//! two-file king move constructed by the caller.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_square, Square};
use crate::moves::move_descriptions::Move;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(board: &Board, origin: Square, out: &mut Vec<Move>) {
    let Some(piece) = board.piece_at(origin) else {
        return;
    };

    for &(d_row, d_col) in &KING_OFFSETS {
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
