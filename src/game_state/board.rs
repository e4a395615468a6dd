//! Core mutable board state.
//!
//! `Board` is the central model of the engine: an 8x8 grid of optional
//! pieces plus castling rights, the en-passant target square, and the undo
//! stack that makes every `make_move` exactly reversible. One `Board` is
//! constructed per game and mutated in place for its duration, including
//! throughout recursive search.

use crate::errors::ChessError;
use crate::game_state::chess_rules::{
    BACK_RANK_ORDER, BLACK_BACK_ROW, BLACK_PAWN_ROW, KINGSIDE_CASTLE_KING_COL,
    KINGSIDE_CASTLE_ROOK_COL, KINGSIDE_ROOK_COL, QUEENSIDE_CASTLE_ROOK_COL, QUEENSIDE_ROOK_COL,
    WHITE_BACK_ROW, WHITE_PAWN_ROW,
};
use crate::game_state::chess_types::{
    CastlingRights, Color, Piece, PieceKind, Square, CASTLE_ALL, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
use crate::game_state::undo_state::UndoState;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::{parse_square_chars, promotion_kind};

#[derive(Debug, Clone)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    pub castling_rights: CastlingRights,
    /// Square a pawn skipped over on its double push, capturable en passant
    /// on the very next ply only.
    pub en_passant_target: Option<Square>,
    history: Vec<UndoState>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [[None; 8]; 8],
            castling_rights: CASTLE_ALL,
            en_passant_target: None,
            history: Vec::new(),
        }
    }
}

impl Board {
    /// An empty board with full castling rights and no history.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// A board set up in the standard opening position.
    pub fn new_game() -> Self {
        let mut board = Self::default();
        board.setup_initial_position();
        board
    }

    /// Reset to the standard opening array: all castling rights granted,
    /// no en-passant target, history cleared.
    pub fn setup_initial_position(&mut self) {
        self.squares = [[None; 8]; 8];
        self.castling_rights = CASTLE_ALL;
        self.en_passant_target = None;
        self.history.clear();

        for col in 0..8i8 {
            let kind = BACK_RANK_ORDER[col as usize];
            self.set_piece_at((BLACK_BACK_ROW, col), Some(Piece::new(kind, Color::Black)));
            self.set_piece_at(
                (BLACK_PAWN_ROW, col),
                Some(Piece::new(PieceKind::Pawn, Color::Black)),
            );
            self.set_piece_at(
                (WHITE_PAWN_ROW, col),
                Some(Piece::new(PieceKind::Pawn, Color::White)),
            );
            self.set_piece_at((WHITE_BACK_ROW, col), Some(Piece::new(kind, Color::White)));
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.0 as usize][square.1 as usize]
    }

    #[inline]
    pub fn set_piece_at(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.0 as usize][square.1 as usize] = piece;
    }

    /// Number of executed, not-yet-undone moves.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Parse 4- or 5-character coordinate notation (for example `"e2e4"`,
    /// `"e7e8q"`) into a fully populated move.
    ///
    /// Fails when the string is too short, either square is off the board,
    /// the start square is empty, or its occupant is not `color`'s. A fifth
    /// character selects the promotion piece (unrecognized letters read as
    /// queen). The returned move is not yet checked for legality.
    pub fn parse_move(&self, text: &str, color: Color) -> Result<Move, ChessError> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() < 4 {
            return Err(ChessError::NotationTooShort(text.to_owned()));
        }

        let start = parse_square_chars(chars[0], chars[1])?;
        let end = parse_square_chars(chars[2], chars[3])?;

        let piece_moved = self
            .piece_at(start)
            .ok_or(ChessError::NoPieceAtSquare(start))?;
        if piece_moved.color != color {
            return Err(ChessError::WrongColorAtSquare(start));
        }

        let mut mv = Move::new(start, end, piece_moved, self.piece_at(end));
        mv.promotion = chars.get(4).map(|letter| promotion_kind(*letter));
        Ok(mv)
    }

    /// Execute a move, pushing the pre-mutation snapshot onto the undo
    /// stack. The move is applied as given; legality is the caller's
    /// concern (see `move_generation`).
    pub fn make_move(&mut self, mv: &Move) {
        self.history.push(UndoState {
            mv: *mv,
            prev_castling_rights: self.castling_rights,
            prev_en_passant_target: self.en_passant_target,
        });

        self.set_piece_at(mv.end, Some(mv.piece_moved));
        self.set_piece_at(mv.start, None);

        self.apply_special_effects(mv);
    }

    /// Special-move effects, applied in a fixed order after the plain
    /// piece relocation.
    fn apply_special_effects(&mut self, mv: &Move) {
        let piece = mv.piece_moved;
        let (start_row, start_col) = mv.start;
        let (end_row, end_col) = mv.end;

        // An en-passant target survives exactly one ply.
        self.en_passant_target = None;

        if piece.kind == PieceKind::Pawn {
            // Diagonal pawn move with no recorded capture: en passant. The
            // victim pawn sits on the origin row at the destination column.
            if start_col != end_col && mv.piece_captured.is_none() {
                self.set_piece_at((start_row, end_col), None);
            }

            if (end_row - start_row).abs() == 2 {
                self.en_passant_target = Some((end_row - piece.color.pawn_direction(), end_col));
            }

            if end_row == piece.color.promotion_row() {
                let promoted = mv.promotion.unwrap_or(PieceKind::Queen);
                self.set_piece_at(mv.end, Some(Piece::new(promoted, piece.color)));
            }
        }

        if piece.kind == PieceKind::King {
            // A two-file king move is castling: the rook crosses the king.
            if (end_col - start_col).abs() == 2 {
                if end_col == KINGSIDE_CASTLE_KING_COL {
                    let rook = self.piece_at((end_row, KINGSIDE_ROOK_COL));
                    self.set_piece_at((end_row, KINGSIDE_CASTLE_ROOK_COL), rook);
                    self.set_piece_at((end_row, KINGSIDE_ROOK_COL), None);
                } else {
                    let rook = self.piece_at((end_row, QUEENSIDE_ROOK_COL));
                    self.set_piece_at((end_row, QUEENSIDE_CASTLE_ROOK_COL), rook);
                    self.set_piece_at((end_row, QUEENSIDE_ROOK_COL), None);
                }
            }

            match piece.color {
                Color::White => {
                    self.castling_rights &= !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE)
                }
                Color::Black => {
                    self.castling_rights &= !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE)
                }
            }
        }

        // A rook leaving its home square revokes the matching right. A rook
        // captured on its home square without having moved does not.
        if piece.kind == PieceKind::Rook {
            match (piece.color, mv.start) {
                (Color::White, (WHITE_BACK_ROW, KINGSIDE_ROOK_COL)) => {
                    self.castling_rights &= !CASTLE_WHITE_KINGSIDE
                }
                (Color::White, (WHITE_BACK_ROW, QUEENSIDE_ROOK_COL)) => {
                    self.castling_rights &= !CASTLE_WHITE_QUEENSIDE
                }
                (Color::Black, (BLACK_BACK_ROW, KINGSIDE_ROOK_COL)) => {
                    self.castling_rights &= !CASTLE_BLACK_KINGSIDE
                }
                (Color::Black, (BLACK_BACK_ROW, QUEENSIDE_ROOK_COL)) => {
                    self.castling_rights &= !CASTLE_BLACK_QUEENSIDE
                }
                _ => {}
            }
        }
    }

    /// Revert the most recent move, restoring every board field to its
    /// pre-move value. Calling with an empty history is an internal
    /// invariant breach and leaves the board untouched.
    pub fn undo_move(&mut self) {
        let Some(entry) = self.history.pop() else {
            return;
        };
        let UndoState {
            mv,
            prev_castling_rights,
            prev_en_passant_target,
        } = entry;

        self.castling_rights = prev_castling_rights;
        self.en_passant_target = prev_en_passant_target;

        // Restoring the recorded moved piece also reverts a promotion: the
        // record holds the pawn, not the piece it became.
        self.set_piece_at(mv.start, Some(mv.piece_moved));
        self.set_piece_at(mv.end, mv.piece_captured);

        if mv.is_castling() {
            let end_row = mv.end.0;
            if mv.end.1 == KINGSIDE_CASTLE_KING_COL {
                let rook = self.piece_at((end_row, KINGSIDE_CASTLE_ROOK_COL));
                self.set_piece_at((end_row, KINGSIDE_ROOK_COL), rook);
                self.set_piece_at((end_row, KINGSIDE_CASTLE_ROOK_COL), None);
            } else {
                let rook = self.piece_at((end_row, QUEENSIDE_CASTLE_ROOK_COL));
                self.set_piece_at((end_row, QUEENSIDE_ROOK_COL), rook);
                self.set_piece_at((end_row, QUEENSIDE_CASTLE_ROOK_COL), None);
            }
        }

        if mv.is_en_passant() {
            self.set_piece_at(mv.end, None);
            self.set_piece_at(
                (mv.start.0, mv.end.1),
                Some(Piece::new(PieceKind::Pawn, mv.piece_moved.color.opposite())),
            );
        }
    }

    /// Square of `color`'s king, found by scanning for the king
    /// discriminant. `None` only on corrupted or artificial setups.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        for row in 0..8i8 {
            for col in 0..8i8 {
                if let Some(piece) = self.piece_at((row, col)) {
                    if piece.kind == PieceKind::King && piece.color == color {
                        return Some((row, col));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::errors::ChessError;
    use crate::game_state::chess_types::{
        Color, Piece, PieceKind, CASTLE_ALL, CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE,
        CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
    };
    use crate::moves::move_descriptions::Move;
    use crate::search::transposition_table::PositionKey;

    #[test]
    fn initial_position_matches_standard_array() {
        let board = Board::new_game();
        assert_eq!(
            board.piece_at((7, 4)).expect("e1 occupied"),
            Piece::new(PieceKind::King, Color::White)
        );
        assert_eq!(
            board.piece_at((0, 3)).expect("d8 occupied"),
            Piece::new(PieceKind::Queen, Color::Black)
        );
        for col in 0..8 {
            assert_eq!(
                board.piece_at((6, col)).expect("white pawn row occupied").kind,
                PieceKind::Pawn
            );
            assert!(board.piece_at((4, col)).is_none());
        }
        assert_eq!(board.castling_rights, CASTLE_ALL);
        assert!(board.en_passant_target.is_none());
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn parse_rejects_bad_notation_and_wrong_color() {
        let board = Board::new_game();
        assert_eq!(
            board.parse_move("e2e", Color::White).expect_err("too short"),
            ChessError::NotationTooShort("e2e".to_owned())
        );
        assert_eq!(
            board.parse_move("i2e4", Color::White).expect_err("bad file"),
            ChessError::InvalidCoordinateChar('i')
        );
        assert_eq!(
            board.parse_move("e4e5", Color::White).expect_err("empty start"),
            ChessError::NoPieceAtSquare((4, 4))
        );
        assert_eq!(
            board.parse_move("e7e5", Color::White).expect_err("black pawn"),
            ChessError::WrongColorAtSquare((1, 4))
        );
    }

    #[test]
    fn parse_populates_capture_and_promotion() {
        let mut board = Board::new_empty();
        board.set_piece_at((1, 0), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece_at((0, 1), Some(Piece::new(PieceKind::Rook, Color::Black)));

        let mv = board.parse_move("a7b8r", Color::White).expect("parses");
        assert_eq!(mv.start, (1, 0));
        assert_eq!(mv.end, (0, 1));
        assert_eq!(
            mv.piece_captured.expect("rook captured"),
            Piece::new(PieceKind::Rook, Color::Black)
        );
        assert_eq!(mv.promotion, Some(PieceKind::Rook));
    }

    #[test]
    fn double_pawn_push_sets_en_passant_target() {
        let mut board = Board::new_game();
        let mv = board.parse_move("e2e4", Color::White).expect("parses");
        board.make_move(&mv);

        assert!(board.piece_at((6, 4)).is_none());
        assert_eq!(
            board.piece_at((4, 4)).expect("e4 occupied"),
            Piece::new(PieceKind::Pawn, Color::White)
        );
        // e3, the square the pawn skipped.
        assert_eq!(board.en_passant_target, Some((5, 4)));

        // The target survives one ply only.
        let reply = board.parse_move("g8f6", Color::Black).expect("parses");
        board.make_move(&reply);
        assert!(board.en_passant_target.is_none());
    }

    #[test]
    fn make_then_undo_restores_position_exactly() {
        let mut board = Board::new_game();
        let before = PositionKey::from_board(&board);

        for notation in ["e2e4", "d2d4", "g1f3"] {
            let mv = board.parse_move(notation, Color::White).expect("parses");
            board.make_move(&mv);
            board.undo_move();
            assert_eq!(PositionKey::from_board(&board), before, "{notation}");
            assert_eq!(board.history_len(), 0);
        }
    }

    #[test]
    fn capture_round_trip_restores_victim() {
        let mut board = Board::new_game();
        for (notation, color) in [("e2e4", Color::White), ("d7d5", Color::Black)] {
            let mv = board.parse_move(notation, color).expect("parses");
            board.make_move(&mv);
        }
        let before = PositionKey::from_board(&board);

        let capture = board.parse_move("e4d5", Color::White).expect("parses");
        assert!(capture.is_capture());
        board.make_move(&capture);
        assert_eq!(
            board.piece_at((3, 3)).expect("d5 occupied"),
            Piece::new(PieceKind::Pawn, Color::White)
        );
        board.undo_move();
        assert_eq!(PositionKey::from_board(&board), before);
    }

    #[test]
    fn promotion_without_letter_defaults_to_queen() {
        let mut board = Board::new_empty();
        board.set_piece_at((1, 0), Some(Piece::new(PieceKind::Pawn, Color::White)));
        let before = PositionKey::from_board(&board);

        let mv = board.parse_move("a7a8", Color::White).expect("parses");
        board.make_move(&mv);
        assert_eq!(
            board.piece_at((0, 0)).expect("a8 occupied"),
            Piece::new(PieceKind::Queen, Color::White)
        );

        board.undo_move();
        assert_eq!(PositionKey::from_board(&board), before);
        assert_eq!(
            board.piece_at((1, 0)).expect("pawn restored").kind,
            PieceKind::Pawn
        );
    }

    #[test]
    fn underpromotion_letter_is_honored() {
        let mut board = Board::new_empty();
        board.set_piece_at((1, 0), Some(Piece::new(PieceKind::Pawn, Color::White)));

        let mv = board.parse_move("a7a8n", Color::White).expect("parses");
        board.make_move(&mv);
        assert_eq!(
            board.piece_at((0, 0)).expect("a8 occupied"),
            Piece::new(PieceKind::Knight, Color::White)
        );
    }

    #[test]
    fn en_passant_capture_removes_and_restores_victim() {
        let mut board = Board::new_empty();
        board.set_piece_at((3, 4), Some(Piece::new(PieceKind::Pawn, Color::White)));
        board.set_piece_at((1, 3), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let push = board.parse_move("d7d5", Color::Black).expect("parses");
        board.make_move(&push);
        assert_eq!(board.en_passant_target, Some((2, 3)));
        let before = PositionKey::from_board(&board);

        // The pawn rule set never emits this move; it is built by the
        // caller targeting the skipped square.
        let capture = board.parse_move("e5d6", Color::White).expect("parses");
        assert!(capture.is_en_passant());
        board.make_move(&capture);
        assert_eq!(
            board.piece_at((2, 3)).expect("d6 occupied"),
            Piece::new(PieceKind::Pawn, Color::White)
        );
        assert!(board.piece_at((3, 3)).is_none(), "victim pawn removed");

        board.undo_move();
        assert_eq!(PositionKey::from_board(&board), before);
        assert_eq!(
            board.piece_at((3, 3)).expect("victim restored").color,
            Color::Black
        );
    }

    #[test]
    fn kingside_castling_relocates_rook_and_round_trips() {
        let mut board = Board::new_empty();
        board.set_piece_at((7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.set_piece_at((7, 7), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.set_piece_at((0, 4), Some(Piece::new(PieceKind::King, Color::Black)));
        let before = PositionKey::from_board(&board);

        // Castling moves are only ever constructed by the caller; the king
        // rule set does not emit two-file moves.
        let castle = board.parse_move("e1g1", Color::White).expect("parses");
        assert!(castle.is_castling());
        board.make_move(&castle);
        assert_eq!(
            board.piece_at((7, 6)).expect("g1 occupied").kind,
            PieceKind::King
        );
        assert_eq!(
            board.piece_at((7, 5)).expect("f1 occupied").kind,
            PieceKind::Rook
        );
        assert!(board.piece_at((7, 7)).is_none());
        assert_eq!(board.castling_rights & CASTLE_WHITE_KINGSIDE, 0);
        assert_eq!(board.castling_rights & CASTLE_WHITE_QUEENSIDE, 0);

        board.undo_move();
        assert_eq!(PositionKey::from_board(&board), before);
    }

    #[test]
    fn queenside_castling_relocates_rook() {
        let mut board = Board::new_empty();
        board.set_piece_at((0, 4), Some(Piece::new(PieceKind::King, Color::Black)));
        board.set_piece_at((0, 0), Some(Piece::new(PieceKind::Rook, Color::Black)));

        let castle = board.parse_move("e8c8", Color::Black).expect("parses");
        board.make_move(&castle);
        assert_eq!(
            board.piece_at((0, 2)).expect("c8 occupied").kind,
            PieceKind::King
        );
        assert_eq!(
            board.piece_at((0, 3)).expect("d8 occupied").kind,
            PieceKind::Rook
        );
        assert!(board.piece_at((0, 0)).is_none());
    }

    #[test]
    fn rook_moves_revoke_matching_right_only() {
        let mut board = Board::new_game();
        // Clear a2 so the a1 rook can move.
        board.set_piece_at((6, 0), None);
        let mv = board.parse_move("a1a3", Color::White).expect("parses");
        board.make_move(&mv);

        assert_eq!(board.castling_rights & CASTLE_WHITE_QUEENSIDE, 0);
        assert_ne!(board.castling_rights & CASTLE_WHITE_KINGSIDE, 0);
        assert_ne!(board.castling_rights & CASTLE_BLACK_KINGSIDE, 0);
        assert_ne!(board.castling_rights & CASTLE_BLACK_QUEENSIDE, 0);

        board.undo_move();
        assert_eq!(board.castling_rights, CASTLE_ALL);
    }

    #[test]
    fn capturing_home_square_rook_leaves_rights_intact() {
        let mut board = Board::new_empty();
        board.set_piece_at((0, 7), Some(Piece::new(PieceKind::Rook, Color::Black)));
        board.set_piece_at((4, 7), Some(Piece::new(PieceKind::Rook, Color::White)));

        let capture = board.parse_move("h4h8", Color::White).expect("parses");
        board.make_move(&capture);

        // The black kingside right stays set even though its rook is gone.
        assert_ne!(board.castling_rights & CASTLE_BLACK_KINGSIDE, 0);
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut board = Board::new_game();
        let before = PositionKey::from_board(&board);
        board.undo_move();
        assert_eq!(PositionKey::from_board(&board), before);
        assert_eq!(board.history_len(), 0);
    }

    #[test]
    fn find_king_scans_the_grid() {
        let board = Board::new_game();
        assert_eq!(board.find_king(Color::White), Some((7, 4)));
        assert_eq!(board.find_king(Color::Black), Some((0, 4)));
        assert_eq!(Board::new_empty().find_king(Color::White), None);
    }
}
