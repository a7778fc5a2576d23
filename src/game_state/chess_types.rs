//! Core value types shared by the board, move generation and the lobby.
//! Pieces carry their own move-state flags so castling and en passant can be
//! decided from the board contents alone.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two sides of a chess game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TeamColor {
    White,
    Black,
}

impl TeamColor {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            TeamColor::White => 0,
            TeamColor::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            TeamColor::White => TeamColor::Black,
            TeamColor::Black => TeamColor::White,
        }
    }

    /// Row direction a pawn of this color advances in.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            TeamColor::White => 1,
            TeamColor::Black => -1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            TeamColor::White => "WHITE",
            TeamColor::Black => "BLACK",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "WHITE" => Some(TeamColor::White),
            "BLACK" => Some(TeamColor::Black),
            _ => None,
        }
    }
}

impl fmt::Display for TeamColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Piece kind. Color is stored separately on [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::Rook,
        PieceType::Pawn,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceType::King => 0,
            PieceType::Queen => 1,
            PieceType::Bishop => 2,
            PieceType::Knight => 3,
            PieceType::Rook => 4,
            PieceType::Pawn => 5,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PieceType::King => "KING",
            PieceType::Queen => "QUEEN",
            PieceType::Bishop => "BISHOP",
            PieceType::Knight => "KNIGHT",
            PieceType::Rook => "ROOK",
            PieceType::Pawn => "PAWN",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        PieceType::ALL.into_iter().find(|p| p.as_str() == upper)
    }

    /// True for the four types a pawn may become on the last row.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceType::Queen | PieceType::Rook | PieceType::Bishop | PieceType::Knight
        )
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A piece on the board.
///
/// `has_moved` gates castling for kings and rooks. `just_double_moved` marks a
/// pawn that advanced two rows on the previous ply and may be captured en
/// passant on the very next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: TeamColor,
    pub piece_type: PieceType,
    pub has_moved: bool,
    pub just_double_moved: bool,
}

impl Piece {
    /// A piece that has never moved.
    #[inline]
    pub const fn new(color: TeamColor, piece_type: PieceType) -> Self {
        Self {
            color,
            piece_type,
            has_moved: false,
            just_double_moved: false,
        }
    }

    /// Same color and type, ignoring move-state flags.
    #[inline]
    pub fn same_kind(&self, other: &Piece) -> bool {
        self.color == other.color && self.piece_type == other.piece_type
    }

    #[inline]
    pub fn is(&self, color: TeamColor, piece_type: PieceType) -> bool {
        self.color == color && self.piece_type == piece_type
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.piece_type)
    }
}
