//! Long algebraic move notation (`e2e4`, `e7e8q`).
//!
//! Parsing produces a bare [`Move`] (start, end, promotion). Castling and en
//! passant are recognised by `make_move` from the legal move set, so the
//! notation never has to spell them out.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceType;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

pub fn move_to_long_algebraic(mv: &Move) -> Result<String, ChessErrors> {
    let mut out = String::with_capacity(5);
    out.push_str(&position_to_algebraic(mv.start)?);
    out.push_str(&position_to_algebraic(mv.end)?);
    if let Some(promotion) = mv.promotion {
        out.push(promotion_to_char(promotion)?);
    }
    Ok(out)
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<Move, ChessErrors> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let start = algebraic_to_position(&text[0..2])?;
    let end = algebraic_to_position(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(Move::new(start, end, promotion))
}

fn promotion_to_char(piece_type: PieceType) -> Result<char, ChessErrors> {
    match piece_type {
        PieceType::Knight => Ok('n'),
        PieceType::Bishop => Ok('b'),
        PieceType::Rook => Ok('r'),
        PieceType::Queen => Ok('q'),
        other => Err(ChessErrors::IllegalPieceType(other)),
    }
}

fn char_to_promotion(ch: char) -> Result<PieceType, ChessErrors> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceType::Knight),
        'b' => Ok(PieceType::Bishop),
        'r' => Ok(PieceType::Rook),
        'q' => Ok(PieceType::Queen),
        'k' => Err(ChessErrors::IllegalPieceType(PieceType::King)),
        'p' => Err(ChessErrors::IllegalPieceType(PieceType::Pawn)),
        _ => Err(ChessErrors::InvalidAlgebraicString(ch.to_string())),
    }
}
