//! Pseudo-legal move generation entry point.
//!
//! Dispatches on the movement table in `chess_rules`; the result ignores
//! whether the mover's own king is left in check.

use crate::game_state::board_position::Position;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_rules::{movement_of, Reach};
use crate::game_state::chess_types::{Piece, PieceType};
use crate::moves::chess_move::Move;
use crate::moves::king_moves::generate_castling_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::sliding_moves::{generate_sliding_moves, generate_step_moves};

impl Piece {
    /// Every move this piece could make from `my_position` given the board's
    /// occupancy, including castling candidates and en passant.
    pub fn piece_moves(&self, board: &Board, my_position: Position) -> Vec<Move> {
        let mut out = Vec::with_capacity(28);
        self.append_piece_moves(board, my_position, &mut out);
        out
    }

    pub fn append_piece_moves(&self, board: &Board, my_position: Position, out: &mut Vec<Move>) {
        let (reach, directions) = movement_of(self.piece_type);
        match reach {
            Reach::Slide => generate_sliding_moves(board, my_position, self.color, directions, out),
            Reach::Step => generate_step_moves(board, my_position, self.color, directions, out),
            Reach::Pawn => generate_pawn_moves(board, my_position, self.color, out),
        }

        if self.piece_type == PieceType::King {
            generate_castling_moves(board, my_position, self, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::board_position::Position;
    use crate::game_state::chess_board::Board;
    use crate::game_state::chess_types::{Piece, PieceType, TeamColor};

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves_per_side() {
        let board = Board::new_standard();
        for color in [TeamColor::White, TeamColor::Black] {
            let total: usize = board
                .pieces_of(color)
                .map(|(position, piece)| piece.piece_moves(&board, position).len())
                .sum();
            assert_eq!(total, 20);
        }
    }

    #[test]
    fn queen_combines_rook_and_bishop_rays() {
        let mut board = Board::new();
        let queen = Piece::new(TeamColor::Black, PieceType::Queen);
        board.set_piece(Position::new(4, 4), Some(queen));
        assert_eq!(queen.piece_moves(&board, Position::new(4, 4)).len(), 27);
    }

    #[test]
    fn generated_moves_stay_on_the_board() {
        let mut board = Board::new();
        for (position, piece_type) in [
            (Position::new(1, 1), PieceType::King),
            (Position::new(8, 8), PieceType::Knight),
            (Position::new(1, 8), PieceType::Bishop),
            (Position::new(8, 1), PieceType::Rook),
        ] {
            board.set_piece(position, Some(Piece::new(TeamColor::White, piece_type)));
        }
        for (position, piece) in board.occupied() {
            assert!(piece
                .piece_moves(&board, position)
                .iter()
                .all(|m| m.end.is_on_board() && m.start == position));
        }
    }
}
