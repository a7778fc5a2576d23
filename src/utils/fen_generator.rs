//! Game-to-FEN serializer.
//!
//! Castling availability is derived from unmoved kings and rooks on their
//! home squares and the en-passant target from the pawn flagged as having
//! just double-moved. `Game` keeps no clocks, so they are always written as
//! `0 1`.

use crate::game_state::board_position::Position;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_rules::back_row;
use crate::game_state::chess_types::{PieceType, TeamColor};
use crate::game_state::game_state::Game;

pub fn generate_fen(game: &Game) -> String {
    let board = game.board();
    let side = match game.team_turn() {
        TeamColor::White => "w",
        TeamColor::Black => "b",
    };

    format!(
        "{} {} {} {} 0 1",
        generate_board_field(board),
        side,
        generate_castling_field(board),
        generate_en_passant_field(board, game.team_turn())
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for row in (1..=8).rev() {
        let mut empty_run = 0u8;
        for column in 1..=8 {
            match board.get_piece(Position::new(row, column)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece.color, piece.piece_type));
                }
                None => empty_run += 1,
            }
        }

        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row > 1 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(color: TeamColor, piece_type: PieceType) -> char {
    let ch = match piece_type {
        PieceType::Pawn => 'p',
        PieceType::Knight => 'n',
        PieceType::Bishop => 'b',
        PieceType::Rook => 'r',
        PieceType::Queen => 'q',
        PieceType::King => 'k',
    };

    match color {
        TeamColor::White => ch.to_ascii_uppercase(),
        TeamColor::Black => ch,
    }
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();

    for color in [TeamColor::White, TeamColor::Black] {
        let row = back_row(color);
        let unmoved = |column: i8, piece_type: PieceType| {
            board
                .get_piece(Position::new(row, column))
                .is_some_and(|p| p.is(color, piece_type) && !p.has_moved)
        };

        if !unmoved(5, PieceType::King) {
            continue;
        }
        if unmoved(8, PieceType::Rook) {
            out.push(piece_to_fen_char(color, PieceType::King));
        }
        if unmoved(1, PieceType::Rook) {
            out.push(piece_to_fen_char(color, PieceType::Queen));
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

fn generate_en_passant_field(board: &Board, turn: TeamColor) -> String {
    let mover = turn.opposite();
    board
        .pieces_of(mover)
        .find(|(_, piece)| piece.piece_type == PieceType::Pawn && piece.just_double_moved)
        .map(|(position, _)| position.offset(-mover.pawn_direction(), 0).to_string())
        .unwrap_or_else(|| "-".to_owned())
}
