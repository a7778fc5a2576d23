//! Canonical chess-rule constants.
//!
//! Holds the starting layout, the pawn home and promotion rows, and the
//! direction tables that drive move generation. Directions are `(d_row,
//! d_column)` pairs looked up by piece type.

use crate::game_state::chess_types::{PieceType, TeamColor};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from column 1 to column 8, identical for both colors.
pub const BACK_RANK_ORDER: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Order in which promotion variants are emitted.
pub const PROMOTION_CHOICES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, -1), (-1, -1), (1, 1), (-1, 1)];
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const ROYAL_DIRECTIONS: [(i8, i8); 8] = [
    (1, -1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Movement pattern of a piece type: how far it travels along its directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// One step per direction (king, knight).
    Step,
    /// Repeated steps until blocked (bishop, rook, queen).
    Slide,
    /// Pawn rules; the direction table is empty.
    Pawn,
}

/// Directions and reach for each piece type, indexed by [`PieceType::index`].
pub const MOVEMENT_TABLE: [(Reach, &[(i8, i8)]); 6] = [
    (Reach::Step, &ROYAL_DIRECTIONS),
    (Reach::Slide, &ROYAL_DIRECTIONS),
    (Reach::Slide, &DIAGONAL_DIRECTIONS),
    (Reach::Step, &KNIGHT_OFFSETS),
    (Reach::Slide, &ORTHOGONAL_DIRECTIONS),
    (Reach::Pawn, &[]),
];

#[inline]
pub fn movement_of(piece_type: PieceType) -> (Reach, &'static [(i8, i8)]) {
    MOVEMENT_TABLE[piece_type.index()]
}

/// Row holding a color's pieces at the start.
#[inline]
pub const fn back_row(color: TeamColor) -> i8 {
    match color {
        TeamColor::White => 1,
        TeamColor::Black => 8,
    }
}

/// Row a color's pawns start on.
#[inline]
pub const fn pawn_home_row(color: TeamColor) -> i8 {
    match color {
        TeamColor::White => 2,
        TeamColor::Black => 7,
    }
}

/// Row where a color's pawns promote.
#[inline]
pub const fn promotion_row(color: TeamColor) -> i8 {
    match color {
        TeamColor::White => 8,
        TeamColor::Black => 1,
    }
}
