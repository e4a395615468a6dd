//! Random-move engine.
//!
//! Selects uniformly from legal moves; used for diagnostics, integration
//! testing, and low-strength gameplay.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "pocket_chess random"
    }

    fn choose_move(&mut self, board: &mut Board, color: Color, _depth: u8) -> Option<Move> {
        let legal_moves = generate_legal_moves(board, color);
        let mut rng = rand::rng();
        legal_moves.as_slice().choose(&mut rng).copied()
    }
}
