//! Errors raised by the rules engine and the notation helpers.
//!
//! `ChessErrors` is the single error type of the engine. Move rejections are
//! grouped under `InvalidMove` so callers can treat every illegal submission
//! the same way (reject the input and ask again) while still reporting the
//! precise reason. The game is never modified when an error is returned.

use std::error::Error;
use std::fmt;

use crate::game_state::board_position::Position;
use crate::game_state::chess_types::{PieceType, TeamColor};
use crate::moves::chess_move::Move;

/// Why `make_move` refused a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The start square is empty.
    NoPieceAtStart(Position),
    /// The piece on the start square belongs to the side not on move.
    NotYourTurn { piece: TeamColor, turn: TeamColor },
    /// The move is not in the legal set for its start square.
    NotALegalMove(Move),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A submitted move was rejected. Always recoverable.
    InvalidMove(InvalidMoveReason),

    /// A promotion to a piece type that cannot be promoted to.
    ///
    /// Generation never produces this; it signals a caller defect such as a
    /// hand-built move or a malformed wire message.
    IllegalPieceType(PieceType),

    /// A coordinate outside rows/columns 1..=8.
    OutOfBounds(Position),

    /// A square or move string that is not valid algebraic notation.
    InvalidAlgebraicString(String),

    /// A FEN string that could not be parsed.
    InvalidFen(String),

    /// A JSON game snapshot or move that could not be decoded.
    InvalidWireFormat(String),
}

impl ChessErrors {
    #[inline]
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, ChessErrors::InvalidMove(_))
    }
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::NoPieceAtStart(position) => {
                write!(f, "no piece at starting position {position}")
            }
            InvalidMoveReason::NotYourTurn { piece, turn } => {
                write!(f, "{piece} piece moved but it is {turn}'s turn")
            }
            InvalidMoveReason::NotALegalMove(mv) => write!(f, "{mv} is not a legal move"),
        }
    }
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::InvalidMove(reason) => write!(f, "invalid move: {reason}"),
            ChessErrors::IllegalPieceType(piece_type) => {
                write!(f, "cannot promote to {piece_type}")
            }
            ChessErrors::OutOfBounds(position) => write!(f, "position {position} is off the board"),
            ChessErrors::InvalidAlgebraicString(s) => write!(f, "invalid algebraic notation: {s}"),
            ChessErrors::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessErrors::InvalidWireFormat(msg) => write!(f, "invalid wire format: {msg}"),
        }
    }
}

impl Error for ChessErrors {}

impl From<InvalidMoveReason> for ChessErrors {
    fn from(reason: InvalidMoveReason) -> Self {
        ChessErrors::InvalidMove(reason)
    }
}
