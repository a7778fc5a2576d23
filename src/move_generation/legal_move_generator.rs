//! Legal move generation and terminal-state detection.
//!
//! Each pseudo-legal candidate is played on a copy of the board and kept only
//! if the mover's king is not attacked afterwards. Castling additionally
//! requires the king not to be in check before moving and not to pass through
//! an attacked square. The live board is never touched, so every query here
//! takes `&self`.

use std::fmt;

use crate::game_state::board_position::Position;
use crate::game_state::chess_types::TeamColor;
use crate::game_state::game_state::Game;
use crate::move_generation::legal_move_apply::apply_move_effects;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_safe_for_king};
use crate::moves::chess_move::Move;
use crate::moves::king_moves::CastleSide;

/// State of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The given side is in check but has a legal reply.
    Check(TeamColor),
    /// The given side is checkmated.
    Checkmate(TeamColor),
    /// The given side has no legal move and is not in check.
    Stalemate(TeamColor),
}

impl GameStatus {
    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate(_) | GameStatus::Stalemate(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => write!(f, "{color} is checkmated"),
            GameStatus::Stalemate(color) => write!(f, "{color} is stalemated"),
        }
    }
}

impl Game {
    /// Legal moves for the piece at `start_position`, or `None` when the
    /// square is empty. Works for either color regardless of turn.
    pub fn valid_moves(&self, start_position: Position) -> Option<Vec<Move>> {
        let piece = self.board.get_piece(start_position)?;
        let color = piece.color;

        let mut in_check_now: Option<bool> = None;
        let moves = piece
            .piece_moves(&self.board, start_position)
            .into_iter()
            .filter(|mv| {
                if mv.is_castle {
                    let in_check = *in_check_now.get_or_insert_with(|| self.is_in_check(color));
                    if in_check || !self.castle_transit_is_safe(mv) {
                        return false;
                    }
                }
                let mut scratch = self.board;
                apply_move_effects(&mut scratch, mv);
                !is_king_in_check(&scratch, color)
            })
            .collect();

        Some(moves)
    }

    /// Every legal move available to `color`.
    pub fn all_valid_moves(&self, color: TeamColor) -> Vec<Move> {
        self.board
            .pieces_of(color)
            .filter_map(|(position, _)| self.valid_moves(position))
            .flatten()
            .collect()
    }

    /// Stops at the first piece with a legal move.
    pub fn has_any_valid_move(&self, color: TeamColor) -> bool {
        self.board
            .pieces_of(color)
            .any(|(position, _)| self.valid_moves(position).is_some_and(|moves| !moves.is_empty()))
    }

    /// Determines if the given team is in checkmate.
    pub fn is_in_checkmate(&self, color: TeamColor) -> bool {
        self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Determines if the given team is in stalemate: not in check and without
    /// any legal move.
    pub fn is_in_stalemate(&self, color: TeamColor) -> bool {
        !self.is_in_check(color) && !self.has_any_valid_move(color)
    }

    /// Check, mate or stalemate for the side to move.
    pub fn game_status(&self) -> GameStatus {
        let color = self.turn;
        let in_check = self.is_in_check(color);
        let can_move = self.has_any_valid_move(color);
        match (in_check, can_move) {
            (true, true) => GameStatus::Check(color),
            (true, false) => GameStatus::Checkmate(color),
            (false, false) => GameStatus::Stalemate(color),
            (false, true) => GameStatus::InProgress,
        }
    }

    fn castle_transit_is_safe(&self, mv: &Move) -> bool {
        let Some(side) = CastleSide::for_move(mv.start, mv.end) else {
            return false;
        };
        let Some(king) = self.board.get_piece(mv.start) else {
            return false;
        };
        is_square_safe_for_king(&self.board, mv.start, side.transit(mv.start), king.color)
    }
}
