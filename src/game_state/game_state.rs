//! The game proper: a board plus whose turn it is.
//!
//! `Game` is created at the standard starting position with White to move and
//! is mutated only by `make_move` (see `move_generation::legal_move_apply`).
//! Queries such as `valid_moves` and `is_in_check` live next to the move
//! generator and take `&self`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_types::TeamColor;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: TeamColor,
}

impl Default for Game {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::new_standard(),
            turn: TeamColor::White,
        }
    }

    /// A game continuing from an arbitrary position.
    pub fn from_board(board: Board, turn: TeamColor) -> Self {
        Self { board, turn }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replaces the board contents, keeping the turn.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    #[inline]
    pub fn team_turn(&self) -> TeamColor {
        self.turn
    }

    /// Overrides whose turn it is. Intended for setting up positions.
    pub fn set_team_turn(&mut self, team: TeamColor) {
        self.turn = team;
    }
}
