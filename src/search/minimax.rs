//! Depth-limited minimax with alpha-beta pruning and a transposition table.
//!
//! Scores are always on the absolute white-positive scale: White maximizes,
//! Black minimizes. The search mutates the caller's board in place, so every
//! recursive step pairs exactly one `make_move` with exactly one
//! `undo_move`, including on a pruning cutoff.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_checks::is_in_check;
use crate::move_generation::move_generator::generate_legal_moves;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, MATE_SCORE};
use crate::search::transposition_table::{
    Bound, PositionKey, TranspositionEntry, TranspositionTable,
};

/// Above any reachable score, including the mate sentinels.
const INFINITY_SCORE: i32 = 1_000_000;

/// Stable partition: captures keep their generation order ahead of quiet
/// moves. Not a full ranking.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| !mv.is_capture());
}

/// The search engine: a scorer plus the transposition table that lives for
/// the lifetime of this instance and is shared across its searches.
pub struct SearchEngine<S: BoardScorer = MaterialScorer> {
    scorer: S,
    table: TranspositionTable,
}

impl SearchEngine<MaterialScorer> {
    pub fn new() -> Self {
        Self::with_scorer(MaterialScorer)
    }
}

impl Default for SearchEngine<MaterialScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> SearchEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self::with_table(scorer, TranspositionTable::with_default_capacity())
    }

    pub fn with_table(scorer: S, table: TranspositionTable) -> Self {
        Self { scorer, table }
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.table
    }

    /// Forget cached positions from previous games.
    pub fn new_game(&mut self) {
        self.table.clear();
    }

    /// Best move for `color` at the given depth, or `None` when `color`
    /// has no legal moves (checkmate or stalemate).
    pub fn find_best_move(&mut self, board: &mut Board, color: Color, depth: u8) -> Option<Move> {
        let mut moves = generate_legal_moves(board, color);
        if moves.is_empty() {
            return None;
        }
        order_moves(&mut moves);

        let child_depth = depth.saturating_sub(1);
        let mut alpha = -INFINITY_SCORE;
        let mut beta = INFINITY_SCORE;
        let mut best_move = None;

        match color {
            Color::White => {
                let mut best_score = -INFINITY_SCORE;
                for mv in &moves {
                    board.make_move(mv);
                    let score = self.minimax(board, Color::Black, child_depth, alpha, beta);
                    board.undo_move();

                    if best_move.is_none() || score > best_score {
                        best_score = score;
                        best_move = Some(*mv);
                    }
                    alpha = alpha.max(best_score);
                    if alpha >= beta {
                        break;
                    }
                }
            }
            Color::Black => {
                let mut best_score = INFINITY_SCORE;
                for mv in &moves {
                    board.make_move(mv);
                    let score = self.minimax(board, Color::White, child_depth, alpha, beta);
                    board.undo_move();

                    if best_move.is_none() || score < best_score {
                        best_score = score;
                        best_move = Some(*mv);
                    }
                    beta = beta.min(best_score);
                    if alpha >= beta {
                        break;
                    }
                }
            }
        }

        best_move
    }

    fn minimax(&mut self, board: &mut Board, color: Color, depth: u8, alpha: i32, beta: i32) -> i32 {
        let key = PositionKey::from_board(board);
        if let Some(entry) = self.table.probe(&key) {
            // A shallower entry is no substitute for the requested depth,
            // and a bounded score only short-circuits when it would cause
            // the same cutoff here.
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return entry.score,
                    Bound::Lower if entry.score >= beta => return entry.score,
                    Bound::Upper if entry.score <= alpha => return entry.score,
                    _ => {}
                }
            }
        }

        if depth == 0 {
            let score = self.scorer.score(board);
            self.table.store(TranspositionEntry {
                key,
                depth,
                score,
                bound: Bound::Exact,
            });
            return score;
        }

        let mut moves = generate_legal_moves(board, color);
        if moves.is_empty() {
            if is_in_check(board, color) {
                // Checkmated: a large sentinel favoring the opponent.
                return match color {
                    Color::White => -MATE_SCORE,
                    Color::Black => MATE_SCORE,
                };
            }
            return 0;
        }
        order_moves(&mut moves);

        let (alpha_start, beta_start) = (alpha, beta);
        let mut alpha = alpha;
        let mut beta = beta;

        let best_score = match color {
            Color::White => {
                let mut best = -INFINITY_SCORE;
                for mv in &moves {
                    board.make_move(mv);
                    let score = self.minimax(board, Color::Black, depth - 1, alpha, beta);
                    board.undo_move();

                    best = best.max(score);
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
            Color::Black => {
                let mut best = INFINITY_SCORE;
                for mv in &moves {
                    board.make_move(mv);
                    let score = self.minimax(board, Color::White, depth - 1, alpha, beta);
                    board.undo_move();

                    best = best.min(score);
                    beta = beta.min(best);
                    if beta <= alpha {
                        break;
                    }
                }
                best
            }
        };

        let bound = if best_score <= alpha_start {
            Bound::Upper
        } else if best_score >= beta_start {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.table.store(TranspositionEntry {
            key,
            depth,
            score: best_score,
            bound,
        });

        best_score
    }
}
