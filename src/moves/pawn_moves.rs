//! Pawn pushes, captures, promotions and en passant.

use crate::game_state::board_position::Position;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_rules::{pawn_home_row, promotion_row, PROMOTION_CHOICES};
use crate::game_state::chess_types::{PieceType, TeamColor};
use crate::moves::chess_move::Move;

pub fn generate_pawn_moves(board: &Board, from: Position, color: TeamColor, out: &mut Vec<Move>) {
    let direction = color.pawn_direction();

    // pushes
    let one_step = from.offset(direction, 0);
    if one_step.is_on_board() && board.get_piece(one_step).is_none() {
        push_with_promotions(from, one_step, color, out);

        let two_step = from.offset(2 * direction, 0);
        if from.row == pawn_home_row(color)
            && two_step.is_on_board()
            && board.get_piece(two_step).is_none()
        {
            out.push(Move::new(from, two_step, None));
        }
    }

    // captures and en passant
    for d_column in [-1i8, 1i8] {
        let target = from.offset(direction, d_column);
        if !target.is_on_board() {
            continue;
        }

        match board.get_piece(target) {
            Some(occupant) if occupant.color != color => {
                push_with_promotions(from, target, color, out);
            }
            Some(_) => {}
            None => {
                let beside = from.offset(0, d_column);
                let double_moved_enemy = board.get_piece(beside).is_some_and(|p| {
                    p.color != color && p.piece_type == PieceType::Pawn && p.just_double_moved
                });
                if double_moved_enemy {
                    out.push(Move::en_passant(from, target));
                }
            }
        }
    }
}

/// Emits a plain move, or one move per promotion choice when `to` is on the
/// promotion row.
fn push_with_promotions(from: Position, to: Position, color: TeamColor, out: &mut Vec<Move>) {
    if to.row == promotion_row(color) {
        for promotion in PROMOTION_CHOICES {
            out.push(Move::new(from, to, Some(promotion)));
        }
    } else {
        out.push(Move::new(from, to, None));
    }
}
