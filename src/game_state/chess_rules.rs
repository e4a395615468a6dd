//! Canonical chess-rule constants.
//!
//! Static literals describing the standard opening array and the home
//! squares that castling logic refers to.

use crate::game_state::chess_types::PieceKind;

/// Back-rank piece order, queenside (column 0) to kingside (column 7).
pub const BACK_RANK_ORDER: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const BLACK_BACK_ROW: i8 = 0;
pub const BLACK_PAWN_ROW: i8 = 1;
pub const WHITE_PAWN_ROW: i8 = 6;
pub const WHITE_BACK_ROW: i8 = 7;

/// Rook home columns referenced by castling execution and rights revocation.
pub const QUEENSIDE_ROOK_COL: i8 = 0;
pub const KINGSIDE_ROOK_COL: i8 = 7;

/// Columns a castled king lands on and the castled rook crosses to.
pub const KINGSIDE_CASTLE_KING_COL: i8 = 6;
pub const KINGSIDE_CASTLE_ROOK_COL: i8 = 5;
pub const QUEENSIDE_CASTLE_ROOK_COL: i8 = 3;
