//! King castling candidates.
//!
//! Only the board-shape conditions are checked here: the king and the rook
//! have never moved and the squares between them are empty. Whether the king
//! starts, passes or lands on an attacked square is decided by the legal-move
//! filter.

use crate::game_state::board_position::Position;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_types::{Piece, PieceType};
use crate::moves::chess_move::Move;

/// Geometry of one castling side, as column offsets from the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleSide {
    /// Squares that must be empty.
    pub between: &'static [i8],
    /// Where the unmoved rook must stand.
    pub rook_from: i8,
    /// Where the king lands.
    pub king_to: i8,
    /// Where the rook lands.
    pub rook_to: i8,
}

pub const KINGSIDE: CastleSide = CastleSide {
    between: &[1, 2],
    rook_from: 3,
    king_to: 2,
    rook_to: 1,
};

pub const QUEENSIDE: CastleSide = CastleSide {
    between: &[-1, -2, -3],
    rook_from: -4,
    king_to: -2,
    rook_to: -1,
};

impl CastleSide {
    /// The side a castle move to `king_end` belongs to.
    pub fn for_move(king_start: Position, king_end: Position) -> Option<CastleSide> {
        match king_end.column - king_start.column {
            2 => Some(KINGSIDE),
            -2 => Some(QUEENSIDE),
            _ => None,
        }
    }

    /// The square the king crosses on its way to the landing square.
    #[inline]
    pub fn transit(&self, king_from: Position) -> Position {
        king_from.offset(0, self.king_to.signum())
    }
}

pub fn generate_castling_moves(board: &Board, from: Position, king: &Piece, out: &mut Vec<Move>) {
    if king.piece_type != PieceType::King || king.has_moved {
        return;
    }

    for side in [KINGSIDE, QUEENSIDE] {
        let rook_ready = board.get_piece(from.offset(0, side.rook_from)).is_some_and(|rook| {
            rook.is(king.color, PieceType::Rook) && !rook.has_moved
        });
        let path_clear = side
            .between
            .iter()
            .all(|&d_column| board.get_piece(from.offset(0, d_column)).is_none());

        if rook_ready && path_clear {
            out.push(Move::castle(from, from.offset(0, side.king_to)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::TeamColor;

    fn castling_board() -> Board {
        let mut board = Board::new();
        board.set_piece(Position::new(1, 5), Some(Piece::new(TeamColor::White, PieceType::King)));
        board.set_piece(Position::new(1, 1), Some(Piece::new(TeamColor::White, PieceType::Rook)));
        board.set_piece(Position::new(1, 8), Some(Piece::new(TeamColor::White, PieceType::Rook)));
        board
    }

    fn castles(board: &Board, from: Position) -> Vec<Move> {
        let king = board.get_piece(from).expect("king should be on the board");
        let mut out = Vec::new();
        generate_castling_moves(board, from, &king, &mut out);
        out
    }

    #[test]
    fn both_sides_available_when_clear() {
        let board = castling_board();
        let moves = castles(&board, Position::new(1, 5));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|m| m.is_castle));
        assert!(moves.contains(&Move::new(Position::new(1, 5), Position::new(1, 7), None)));
        assert!(moves.contains(&Move::new(Position::new(1, 5), Position::new(1, 3), None)));
    }

    #[test]
    fn queenside_needs_the_b_file_clear() {
        let mut board = castling_board();
        board.set_piece(Position::new(1, 2), Some(Piece::new(TeamColor::White, PieceType::Knight)));
        let moves = castles(&board, Position::new(1, 5));
        assert_eq!(moves, vec![Move::new(Position::new(1, 5), Position::new(1, 7), None)]);
    }

    #[test]
    fn moved_rook_or_king_forbids_castling() {
        let mut board = castling_board();
        let mut rook = Piece::new(TeamColor::White, PieceType::Rook);
        rook.has_moved = true;
        board.set_piece(Position::new(1, 8), Some(rook));
        assert_eq!(castles(&board, Position::new(1, 5)).len(), 1);

        let mut king = Piece::new(TeamColor::White, PieceType::King);
        king.has_moved = true;
        board.set_piece(Position::new(1, 5), Some(king));
        assert!(castles(&board, Position::new(1, 5)).is_empty());
    }

    #[test]
    fn enemy_rook_in_the_corner_does_not_count() {
        let mut board = castling_board();
        board.set_piece(Position::new(1, 8), Some(Piece::new(TeamColor::Black, PieceType::Rook)));
        assert_eq!(castles(&board, Position::new(1, 5)).len(), 1);
    }

    #[test]
    fn side_lookup_from_king_displacement() {
        let e1 = Position::new(1, 5);
        assert_eq!(CastleSide::for_move(e1, Position::new(1, 7)), Some(KINGSIDE));
        assert_eq!(CastleSide::for_move(e1, Position::new(1, 3)), Some(QUEENSIDE));
        assert_eq!(CastleSide::for_move(e1, Position::new(1, 6)), None);
        assert_eq!(QUEENSIDE.transit(e1), Position::new(1, 4));
    }
}
