//! Bishop candidate-move generation: the four diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::moves::move_descriptions::{generate_ray_moves, Move};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(board: &Board, origin: Square, out: &mut Vec<Move>) {
    let Some(piece) = board.piece_at(origin) else {
        return;
    };
    generate_ray_moves(board, origin, piece, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn open_board_bishop_sweeps_both_diagonals() {
        let mut board = Board::new_empty();
        board.set_piece_at((4, 4), Some(Piece::new(PieceKind::Bishop, Color::White)));
        let mut moves = Vec::new();
        generate_bishop_moves(&board, (4, 4), &mut moves);
        assert_eq!(moves.len(), 13);
    }

    #[test]
    fn rays_stop_at_blockers() {
        let mut board = Board::new_empty();
        board.set_piece_at((4, 4), Some(Piece::new(PieceKind::Bishop, Color::White)));
        // Friendly blocker up-left, enemy blocker up-right.
        board.set_piece_at((2, 2), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece_at((2, 6), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let mut moves = Vec::new();
        generate_bishop_moves(&board, (4, 4), &mut moves);

        assert!(moves.iter().all(|m| m.end != (2, 2)), "friendly square excluded");
        assert!(moves.iter().all(|m| m.end != (1, 1)), "ray stops behind friend");
        let capture = moves
            .iter()
            .find(|m| m.end == (2, 6))
            .expect("enemy blocker captured");
        assert!(capture.is_capture());
        assert!(moves.iter().all(|m| m.end != (1, 7)), "ray stops at capture");
    }

    #[test]
    fn initial_position_bishops_are_locked_in() {
        let board = Board::new_game();
        let mut moves = Vec::new();
        generate_bishop_moves(&board, (7, 2), &mut moves);
        assert!(moves.is_empty());
    }
}
