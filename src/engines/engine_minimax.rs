//! The alpha-beta search opponent.

use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::move_descriptions::Move;
use crate::search::minimax::SearchEngine;

pub struct MinimaxEngine {
    search: SearchEngine,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            search: SearchEngine::new(),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "pocket_chess minimax"
    }

    fn new_game(&mut self) {
        self.search.new_game();
    }

    fn choose_move(&mut self, board: &mut Board, color: Color, depth: u8) -> Option<Move> {
        self.search.find_best_move(board, color, depth)
    }
}
