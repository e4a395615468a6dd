//! Legal-move-tree node counting for correctness checks and benchmarks.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::generate_legal_moves;

/// Count leaf nodes of the legal move tree to the given depth, starting
/// with `color` to move. Depth 0 counts the current position as one node.
pub fn perft(board: &mut Board, color: Color, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for mv in generate_legal_moves(board, color) {
        board.make_move(&mv);
        nodes += perft(board, color.opposite(), depth - 1);
        board.undo_move();
    }
    nodes
}
