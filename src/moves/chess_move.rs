//! The move value passed between generation, validation and execution.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::board_position::Position;
use crate::game_state::chess_types::PieceType;

/// A move from one square to another.
///
/// `is_castle` and `is_en_passant` tell the executor which side effects to
/// apply. They are not part of a move's identity: two moves are equal when
/// start, end and promotion match.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    pub promotion: Option<PieceType>,
    pub is_castle: bool,
    pub is_en_passant: bool,
}

impl Move {
    #[inline]
    pub const fn new(start: Position, end: Position, promotion: Option<PieceType>) -> Self {
        Self {
            start,
            end,
            promotion,
            is_castle: false,
            is_en_passant: false,
        }
    }

    #[inline]
    pub const fn castle(start: Position, end: Position) -> Self {
        Self {
            is_castle: true,
            ..Self::new(start, end, None)
        }
    }

    #[inline]
    pub const fn en_passant(start: Position, end: Position) -> Self {
        Self {
            is_en_passant: true,
            ..Self::new(start, end, None)
        }
    }

    /// Vertical distance travelled.
    #[inline]
    pub fn row_distance(&self) -> i8 {
        (self.end.row - self.start.row).abs()
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.promotion == other.promotion
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.promotion.hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion {
            Some(promotion) => write!(f, "{} -> {} ({})", self.start, self.end, promotion),
            None => write!(f, "{} -> {}", self.start, self.end),
        }
    }
}
