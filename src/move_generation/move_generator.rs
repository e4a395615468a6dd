//! Pseudo-legal and legal move generation.
//!
//! Pseudo-legal generation is the union of every piece's candidate moves
//! and ignores self-check. Legality is derived exclusively by the
//! make / test / undo pattern: execute the candidate, ask whether the
//! mover's own king is attacked, and revert. There is no pin or attack-map
//! precomputation.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::move_generation::legal_move_checks::is_in_check;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Candidate moves of every piece of `color`, ignoring self-check.
pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);

    for row in 0..8i8 {
        for col in 0..8i8 {
            let origin = (row, col);
            let Some(piece) = board.piece_at(origin) else {
                continue;
            };
            if piece.color != color {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(board, origin, &mut out),
                PieceKind::Knight => generate_knight_moves(board, origin, &mut out),
                PieceKind::Bishop => generate_bishop_moves(board, origin, &mut out),
                PieceKind::Rook => generate_rook_moves(board, origin, &mut out),
                PieceKind::Queen => generate_queen_moves(board, origin, &mut out),
                PieceKind::King => generate_king_moves(board, origin, &mut out),
            }
        }
    }

    out
}

/// Pseudo-legal moves filtered down to those that do not leave `color`'s
/// own king attacked.
pub fn generate_legal_moves(board: &mut Board, color: Color) -> Vec<Move> {
    let pseudo = generate_pseudo_legal_moves(board, color);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        board.make_move(&mv);
        if !is_in_check(board, color) {
            legal.push(mv);
        }
        board.undo_move();
    }

    legal
}

/// Make / test / undo check for a single caller-constructed move.
pub fn is_legal_move(board: &mut Board, mv: &Move, color: Color) -> bool {
    board.make_move(mv);
    let legal = !is_in_check(board, color);
    board.undo_move();
    legal
}
