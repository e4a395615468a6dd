//! Engine abstraction layer used by front ends.
//!
//! A common interface so different opponent strategies can be selected at
//! runtime behind a single trait. Search is synchronous and depth-bounded;
//! a caller wanting a time bound imposes it by capping the depth.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::Move;

pub trait Engine {
    fn name(&self) -> &str;

    /// Reset per-game state (for example cached positions).
    fn new_game(&mut self) {}

    /// Pick a move for `color`, or `None` when there is no legal move
    /// (checkmate or stalemate). The board is borrowed mutably for
    /// make/undo during deliberation and is returned unchanged.
    fn choose_move(&mut self, board: &mut Board, color: Color, depth: u8) -> Option<Move>;
}
