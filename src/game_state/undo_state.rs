use crate::game_state::chess_types::{CastlingRights, Square};
use crate::moves::move_descriptions::Move;

/// Single undo record for `make_move` / `undo_move`.
///
/// The move itself carries the moved and captured pieces, so restoring a
/// position needs only this snapshot of the non-derivable board fields.
#[derive(Debug, Clone, Copy)]
pub struct UndoState {
    pub mv: Move,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
}
