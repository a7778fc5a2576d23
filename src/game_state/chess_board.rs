//! Mailbox board representation.
//!
//! An 8x8 grid of optional pieces addressed by [`Position`]. The grid is
//! `Copy`, so legality checks can simulate moves on a scratch copy instead of
//! mutating the live board.

use crate::game_state::board_position::Position;
use crate::game_state::chess_rules::{back_row, pawn_home_row, BACK_RANK_ORDER};
use crate::game_state::chess_types::{Piece, PieceType, TeamColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    // [row - 1][column - 1]
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// A board holding the standard 32-piece starting position.
    pub fn new_standard() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }

    /// Clears the board and places the standard starting position.
    pub fn reset(&mut self) {
        self.squares = [[None; 8]; 8];
        for color in [TeamColor::White, TeamColor::Black] {
            for (column, piece_type) in (1..=8).zip(BACK_RANK_ORDER) {
                self.set_piece(Position::new(back_row(color), column), Some(Piece::new(color, piece_type)));
                self.set_piece(
                    Position::new(pawn_home_row(color), column),
                    Some(Piece::new(color, PieceType::Pawn)),
                );
            }
        }
    }

    /// The occupant of `position`, or `None` when empty or off the board.
    #[inline]
    pub fn get_piece(&self, position: Position) -> Option<Piece> {
        let (row, column) = position.grid_index()?;
        self.squares[row][column]
    }

    /// Mutable access to an occupant, used to update move-state flags in place.
    #[inline]
    pub fn piece_mut(&mut self, position: Position) -> Option<&mut Piece> {
        let (row, column) = position.grid_index()?;
        self.squares[row][column].as_mut()
    }

    /// Replaces the contents of a square. Off-board writes are ignored.
    #[inline]
    pub fn set_piece(&mut self, position: Position, piece: Option<Piece>) {
        if let Some((row, column)) = position.grid_index() {
            self.squares[row][column] = piece;
        }
    }

    /// Empties a square and returns what was there.
    #[inline]
    pub fn take_piece(&mut self, position: Position) -> Option<Piece> {
        let (row, column) = position.grid_index()?;
        self.squares[row][column].take()
    }

    /// First square, in row-major order, holding a piece of the same color
    /// and type as `piece`. Kings are unique per color, so for them this is
    /// their square.
    pub fn find_position(&self, piece: &Piece) -> Option<Position> {
        self.occupied()
            .find(|(_, occupant)| occupant.same_kind(piece))
            .map(|(position, _)| position)
    }

    #[inline]
    pub fn king_position(&self, color: TeamColor) -> Option<Position> {
        self.find_position(&Piece::new(color, PieceType::King))
    }

    /// Every occupied square with its piece, row 1 first.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |position| self.get_piece(position).map(|piece| (position, piece)))
    }

    /// Occupied squares belonging to one color.
    pub fn pieces_of(&self, color: TeamColor) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, color: TeamColor, piece_type: PieceType) -> usize {
        self.pieces_of(color)
            .filter(|(_, piece)| piece.piece_type == piece_type)
            .count()
    }

    /// Clears `just_double_moved` on every pawn of `color`.
    pub fn clear_double_moved(&mut self, color: TeamColor) {
        for piece in self.squares.iter_mut().flatten().flatten() {
            if piece.color == color && piece.piece_type == PieceType::Pawn {
                piece.just_double_moved = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_places_thirty_two_pieces() {
        let board = Board::new_standard();
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.count(TeamColor::White, PieceType::Pawn), 8);
        assert_eq!(board.count(TeamColor::Black, PieceType::Knight), 2);
        assert_eq!(
            board.get_piece(Position::new(1, 4)),
            Some(Piece::new(TeamColor::White, PieceType::Queen))
        );
        assert_eq!(
            board.get_piece(Position::new(8, 5)),
            Some(Piece::new(TeamColor::Black, PieceType::King))
        );
        assert_eq!(board.get_piece(Position::new(4, 4)), None);
    }

    #[test]
    fn reset_clears_previous_contents() {
        let mut board = Board::new();
        board.set_piece(Position::new(4, 4), Some(Piece::new(TeamColor::Black, PieceType::Queen)));
        board.reset();
        assert_eq!(board.get_piece(Position::new(4, 4)), None);
    }

    #[test]
    fn off_board_access_is_silent() {
        let mut board = Board::new_standard();
        assert_eq!(board.get_piece(Position::new(0, 1)), None);
        assert_eq!(board.get_piece(Position::new(1, 9)), None);
        board.set_piece(Position::new(9, 9), Some(Piece::new(TeamColor::White, PieceType::Rook)));
        assert_eq!(board.occupied().count(), 32);
    }

    #[test]
    fn find_position_locates_kings() {
        let board = Board::new_standard();
        assert_eq!(board.king_position(TeamColor::White), Some(Position::new(1, 5)));
        assert_eq!(board.king_position(TeamColor::Black), Some(Position::new(8, 5)));
        assert_eq!(Board::new().king_position(TeamColor::White), None);
    }

    #[test]
    fn clear_double_moved_only_touches_one_color() {
        let mut board = Board::new();
        let mut white = Piece::new(TeamColor::White, PieceType::Pawn);
        white.just_double_moved = true;
        let mut black = Piece::new(TeamColor::Black, PieceType::Pawn);
        black.just_double_moved = true;
        board.set_piece(Position::new(4, 5), Some(white));
        board.set_piece(Position::new(5, 4), Some(black));

        board.clear_double_moved(TeamColor::White);

        assert!(!board.get_piece(Position::new(4, 5)).map_or(true, |p| p.just_double_moved));
        assert!(board.get_piece(Position::new(5, 4)).map_or(false, |p| p.just_double_moved));
    }

    #[test]
    fn clear_double_moved_leaves_other_pieces_alone() {
        let mut board = Board::new();
        let mut pawn = Piece::new(TeamColor::White, PieceType::Pawn);
        pawn.just_double_moved = true;
        let mut knight = Piece::new(TeamColor::White, PieceType::Knight);
        knight.just_double_moved = true;
        board.set_piece(Position::new(4, 5), Some(pawn));
        board.set_piece(Position::new(3, 6), Some(knight));

        board.clear_double_moved(TeamColor::White);

        assert!(!board.get_piece(Position::new(4, 5)).map_or(true, |p| p.just_double_moved));
        assert!(board.get_piece(Position::new(3, 6)).map_or(false, |p| p.just_double_moved));
    }
}
