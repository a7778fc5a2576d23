//! Check detection.
//!
//! A king is in check when any enemy piece has a pseudo-legal move ending on
//! its square. Squares are probed by placing the king there on a scratch copy
//! of the board, so pawn diagonals count as attacks even on empty squares.

use crate::game_state::board_position::Position;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_types::TeamColor;
use crate::game_state::game_state::Game;

/// True when `color`'s king on `board` is attacked. A board without that
/// king is never in check.
pub fn is_king_in_check(board: &Board, color: TeamColor) -> bool {
    let Some(king_square) = board.king_position(color) else {
        return false;
    };

    let mut scratch = Vec::with_capacity(32);
    for (position, piece) in board.pieces_of(color.opposite()) {
        scratch.clear();
        piece.append_piece_moves(board, position, &mut scratch);
        if scratch.iter().any(|mv| mv.end == king_square) {
            return true;
        }
    }
    false
}

/// True when the king of `color` standing on `from` could stand on `square`
/// without being attacked. Used for the castling transit square.
pub fn is_square_safe_for_king(board: &Board, from: Position, square: Position, color: TeamColor) -> bool {
    let mut probe = *board;
    let king = probe.take_piece(from);
    probe.set_piece(square, king);
    !is_king_in_check(&probe, color)
}

impl Game {
    /// Determines if the given team is in check.
    pub fn is_in_check(&self, color: TeamColor) -> bool {
        is_king_in_check(&self.board, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceType};

    fn kings_only() -> Board {
        let mut board = Board::new();
        board.set_piece(Position::new(1, 5), Some(Piece::new(TeamColor::White, PieceType::King)));
        board.set_piece(Position::new(8, 1), Some(Piece::new(TeamColor::Black, PieceType::King)));
        board
    }

    #[test]
    fn rook_on_open_rank_gives_check() {
        let mut board = kings_only();
        board.set_piece(Position::new(1, 1), Some(Piece::new(TeamColor::Black, PieceType::Rook)));
        assert!(is_king_in_check(&board, TeamColor::White));
        assert!(!is_king_in_check(&board, TeamColor::Black));

        board.set_piece(Position::new(1, 3), Some(Piece::new(TeamColor::White, PieceType::Bishop)));
        assert!(!is_king_in_check(&board, TeamColor::White));
    }

    #[test]
    fn pawns_attack_diagonally_forward_only() {
        let mut board = kings_only();
        board.set_piece(Position::new(2, 4), Some(Piece::new(TeamColor::Black, PieceType::Pawn)));
        assert!(is_king_in_check(&board, TeamColor::White));

        let mut board = kings_only();
        board.set_piece(Position::new(2, 5), Some(Piece::new(TeamColor::Black, PieceType::Pawn)));
        assert!(!is_king_in_check(&board, TeamColor::White));
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let mut board = Board::new();
        board.set_piece(Position::new(1, 1), Some(Piece::new(TeamColor::Black, PieceType::Queen)));
        assert!(!is_king_in_check(&board, TeamColor::White));
    }

    #[test]
    fn empty_square_covered_by_pawn_is_unsafe() {
        let mut board = kings_only();
        board.set_piece(Position::new(2, 7), Some(Piece::new(TeamColor::Black, PieceType::Pawn)));
        let e1 = Position::new(1, 5);
        assert!(!is_square_safe_for_king(&board, e1, Position::new(1, 6), TeamColor::White));
        assert!(is_square_safe_for_king(&board, e1, Position::new(1, 4), TeamColor::White));
        // the probe never touches the real board
        assert_eq!(board.king_position(TeamColor::White), Some(e1));
    }

    #[test]
    fn game_reports_no_check_at_start() {
        let game = Game::new_game();
        assert!(!game.is_in_check(TeamColor::White));
        assert!(!game.is_in_check(TeamColor::Black));
    }
}
