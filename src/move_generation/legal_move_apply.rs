//! Move execution.
//!
//! `apply_move_effects` performs the board side of a move (relocation,
//! castling rook, en-passant capture, promotion, move-state flags) and is
//! shared by real moves and by the legality simulation. `Game::make_move`
//! validates first and mutates only once the move is known to be legal.

use log::trace;

use crate::chess_errors::{ChessErrors, InvalidMoveReason};
use crate::game_state::board_position::Position;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_types::{Piece, PieceType};
use crate::game_state::game_state::Game;
use crate::moves::chess_move::Move;
use crate::moves::king_moves::CastleSide;

/// Applies `mv` to `board`. The start square must hold the moving piece.
pub fn apply_move_effects(board: &mut Board, mv: &Move) {
    let Some(mut moving) = board.take_piece(mv.start) else {
        return;
    };

    // en passant lasts exactly one ply
    board.clear_double_moved(moving.color);

    moving.has_moved = true;
    moving.just_double_moved = false;

    if mv.is_castle {
        if let Some(side) = CastleSide::for_move(mv.start, mv.end) {
            let rook_from = mv.start.offset(0, side.rook_from);
            let rook_to = mv.start.offset(0, side.rook_to);
            if let Some(mut rook) = board.take_piece(rook_from) {
                rook.has_moved = true;
                board.set_piece(rook_to, Some(rook));
            }
        }
    }

    if mv.is_en_passant {
        board.set_piece(Position::new(mv.start.row, mv.end.column), None);
    }

    if let Some(promotion) = mv.promotion {
        moving = Piece {
            piece_type: promotion,
            ..moving
        };
    }

    if moving.piece_type == PieceType::Pawn && mv.row_distance() > 1 {
        moving.just_double_moved = true;
    }

    board.set_piece(mv.end, Some(moving));
}

impl Game {
    /// Makes a move in the game.
    ///
    /// Fails with [`ChessErrors::InvalidMove`] when the start square is empty,
    /// holds a piece of the side not on move, or the move is not among that
    /// piece's legal moves. Castling and en-passant side effects come from the
    /// matching legal move, so a caller may submit just start, end and
    /// promotion.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessErrors> {
        let piece = self
            .board
            .get_piece(mv.start)
            .ok_or(InvalidMoveReason::NoPieceAtStart(mv.start))?;

        if piece.color != self.turn {
            return Err(InvalidMoveReason::NotYourTurn {
                piece: piece.color,
                turn: self.turn,
            }
            .into());
        }

        let legal = self
            .valid_moves(mv.start)
            .unwrap_or_default()
            .into_iter()
            .find(|candidate| *candidate == mv)
            .ok_or(InvalidMoveReason::NotALegalMove(mv))?;

        self.apply_unchecked(&legal);
        trace!("{} played {}, {} to move", piece, legal, self.turn);
        Ok(())
    }

    /// Applies a move already known to be legal and passes the turn.
    pub(crate) fn apply_unchecked(&mut self, mv: &Move) {
        apply_move_effects(&mut self.board, mv);
        self.turn = self.turn.opposite();
    }
}
