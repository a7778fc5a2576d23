//! FEN-to-Game parser.
//!
//! Builds a [`Game`] from a Forsyth-Edwards Notation string. The castling
//! field becomes the `has_moved` flags of kings and rooks and the en-passant
//! field marks the pawn that just double-moved. The clocks are validated but
//! not kept.

use crate::chess_errors::ChessErrors;
use crate::game_state::board_position::Position;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_rules::{back_row, pawn_home_row};
use crate::game_state::chess_types::{Piece, PieceType, TeamColor};
use crate::game_state::game_state::Game;
use crate::utils::algebraic::algebraic_to_position;

/// Castling availability as read from the FEN castling field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingField {
    // [color index][0 = kingside, 1 = queenside]
    rights: [[bool; 2]; 2],
}

impl CastlingField {
    fn any(&self, color: TeamColor) -> bool {
        self.rights[color.index()].iter().any(|&r| r)
    }
}

pub fn parse_fen(fen: &str) -> Result<Game, ChessErrors> {
    let mut parts = fen.split_whitespace();
    let mut next_field = |name: &str| {
        parts
            .next()
            .ok_or_else(|| ChessErrors::InvalidFen(format!("missing {name} in FEN")))
    };

    let board_part = next_field("board layout")?;
    let side_part = next_field("side-to-move")?;
    let castling_part = next_field("castling rights")?;
    let en_passant_part = next_field("en-passant square")?;
    let halfmove_part = next_field("halfmove clock")?;
    let fullmove_part = next_field("fullmove number")?;

    if parts.next().is_some() {
        return Err(ChessErrors::InvalidFen("FEN has extra trailing fields".to_owned()));
    }

    let turn = parse_side_to_move(side_part)?;
    let castling = parse_castling_rights(castling_part)?;
    let mut board = parse_board(board_part, &castling)?;
    apply_en_passant_square(en_passant_part, turn, &mut board)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFen(format!("invalid halfmove clock: {halfmove_part}")))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| ChessErrors::InvalidFen(format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(Game::from_board(board, turn))
}

fn parse_board(board_part: &str, castling: &CastlingField) -> Result<Board, ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessErrors::InvalidFen("board layout must contain 8 ranks".to_owned()));
    }

    let mut board = Board::new();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 8 - fen_rank_idx as i8;
        let mut column = 1i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFen(format!("invalid empty-square count '{ch}'")));
                }
                column += empty_count as i8;
                if column > 9 {
                    return Err(ChessErrors::InvalidFen("board rank has too many files".to_owned()));
                }
                continue;
            }

            let (color, piece_type) = piece_from_fen_char(ch)
                .ok_or_else(|| ChessErrors::InvalidFen(format!("invalid piece character '{ch}'")))?;

            if column > 8 {
                return Err(ChessErrors::InvalidFen("board rank has too many files".to_owned()));
            }

            let position = Position::new(row, column);
            let mut piece = Piece::new(color, piece_type);
            piece.has_moved = has_moved_from_fen(position, &piece, castling);
            board.set_piece(position, Some(piece));
            column += 1;
        }

        if column != 9 {
            return Err(ChessErrors::InvalidFen("board rank does not sum to 8 files".to_owned()));
        }
    }

    Ok(board)
}

/// FEN has no move history, so `has_moved` is inferred: pawns off their home
/// row have moved, and kings and rooks have moved unless a castling right
/// says otherwise.
fn has_moved_from_fen(position: Position, piece: &Piece, castling: &CastlingField) -> bool {
    let home_row = back_row(piece.color);
    let rights = castling.rights[piece.color.index()];
    match piece.piece_type {
        PieceType::Pawn => position.row != pawn_home_row(piece.color),
        PieceType::King => !(position == Position::new(home_row, 5) && castling.any(piece.color)),
        PieceType::Rook => {
            let kingside_home = position == Position::new(home_row, 8) && rights[0];
            let queenside_home = position == Position::new(home_row, 1) && rights[1];
            !(kingside_home || queenside_home)
        }
        _ => false,
    }
}

fn parse_side_to_move(side_part: &str) -> Result<TeamColor, ChessErrors> {
    match side_part {
        "w" => Ok(TeamColor::White),
        "b" => Ok(TeamColor::Black),
        _ => Err(ChessErrors::InvalidFen(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingField, ChessErrors> {
    let mut field = CastlingField::default();
    if castling_part == "-" {
        return Ok(field);
    }

    for ch in castling_part.chars() {
        let (color, side) = match ch {
            'K' => (TeamColor::White, 0),
            'Q' => (TeamColor::White, 1),
            'k' => (TeamColor::Black, 0),
            'q' => (TeamColor::Black, 1),
            _ => {
                return Err(ChessErrors::InvalidFen(format!(
                    "invalid castling rights character: {ch}"
                )))
            }
        };
        field.rights[color.index()][side] = true;
    }

    Ok(field)
}

/// Marks the pawn standing in front of the en-passant square. It must be a
/// pawn of the side that just moved.
fn apply_en_passant_square(
    en_passant_part: &str,
    turn: TeamColor,
    board: &mut Board,
) -> Result<(), ChessErrors> {
    if en_passant_part == "-" {
        return Ok(());
    }

    let square = algebraic_to_position(en_passant_part)
        .map_err(|_| ChessErrors::InvalidFen(format!("invalid en-passant square: {en_passant_part}")))?;
    let mover = turn.opposite();
    let pawn_square = square.offset(mover.pawn_direction(), 0);

    match board.piece_mut(pawn_square) {
        Some(pawn) if pawn.is(mover, PieceType::Pawn) => {
            pawn.just_double_moved = true;
            Ok(())
        }
        _ => Err(ChessErrors::InvalidFen(format!(
            "no pawn can be captured en passant on {en_passant_part}"
        ))),
    }
}

fn piece_from_fen_char(ch: char) -> Option<(TeamColor, PieceType)> {
    let color = if ch.is_ascii_uppercase() {
        TeamColor::White
    } else if ch.is_ascii_lowercase() {
        TeamColor::Black
    } else {
        return None;
    };

    let piece_type = match ch.to_ascii_lowercase() {
        'p' => PieceType::Pawn,
        'n' => PieceType::Knight,
        'b' => PieceType::Bishop,
        'r' => PieceType::Rook,
        'q' => PieceType::Queen,
        'k' => PieceType::King,
        _ => return None,
    };

    Some((color, piece_type))
}
