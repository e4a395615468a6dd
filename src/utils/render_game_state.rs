//! Terminal-oriented ASCII board renderer.
//!
//! Produces the 8-line rank display (rank 8 first) with file labels that
//! the console front end prints between moves. Uppercase letters are white
//! pieces, lowercase black, `.` an empty square.

use crate::game_state::board::Board;

pub fn render_game_state(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8i8 {
        let rank = 8 - row;
        out.push(char::from(b'0' + rank as u8));
        out.push(' ');
        for col in 0..8i8 {
            match board.piece_at((row, col)) {
                Some(piece) => out.push(piece.ascii_char()),
                None => out.push('.'),
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");

    out
}
