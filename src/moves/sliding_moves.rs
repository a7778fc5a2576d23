//! Ray and single-step move generation.
//!
//! Bishops, rooks and queens walk each of their directions until the edge or a
//! blocker; kings and knights take one step per direction. A friendly blocker
//! ends the ray before its square, an enemy blocker is included as a capture.

use crate::game_state::board_position::Position;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_types::TeamColor;
use crate::moves::chess_move::Move;

/// What a piece of `color` may do on `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Landing {
    OffBoard,
    Friendly,
    Capture,
    Empty,
}

#[inline]
fn landing(board: &Board, color: TeamColor, target: Position) -> Landing {
    if !target.is_on_board() {
        return Landing::OffBoard;
    }
    match board.get_piece(target) {
        Some(occupant) if occupant.color == color => Landing::Friendly,
        Some(_) => Landing::Capture,
        None => Landing::Empty,
    }
}

pub fn generate_sliding_moves(
    board: &Board,
    from: Position,
    color: TeamColor,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_column) in directions {
        let mut target = from.offset(d_row, d_column);
        loop {
            match landing(board, color, target) {
                Landing::OffBoard | Landing::Friendly => break,
                Landing::Capture => {
                    out.push(Move::new(from, target, None));
                    break;
                }
                Landing::Empty => out.push(Move::new(from, target, None)),
            }
            target = target.offset(d_row, d_column);
        }
    }
}

pub fn generate_step_moves(
    board: &Board,
    from: Position,
    color: TeamColor,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(d_row, d_column) in offsets {
        let target = from.offset(d_row, d_column);
        if matches!(landing(board, color, target), Landing::Capture | Landing::Empty) {
            out.push(Move::new(from, target, None));
        }
    }
}
