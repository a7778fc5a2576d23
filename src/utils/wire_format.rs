//! JSON representation of games and moves exchanged with lobby clients.
//!
//! Pieces are written as `"<COLOR> <TYPE>"` strings and the board as 8 rows
//! of 8 cells starting from row 1. Move-state flags travel as lists of square
//! names so a stored game decodes back to exactly the same position.

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessErrors;
use crate::game_state::board_position::Position;
use crate::game_state::chess_board::Board;
use crate::game_state::chess_types::{Piece, PieceType, TeamColor};
use crate::game_state::game_state::Game;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{algebraic_to_position, position_to_algebraic};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: Vec<Vec<Option<String>>>,
    pub turn: TeamColor,
    #[serde(default)]
    pub pieces_moved: Vec<String>,
    #[serde(default)]
    pub pawns_just_double_moved: Vec<String>,
}

/// A move as submitted by a client: `{"start": "e7", "end": "e8", "promotion": "QUEEN"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMove {
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceType>,
}

pub fn piece_to_wire(piece: &Piece) -> String {
    piece.to_string()
}

pub fn piece_from_wire(text: &str) -> Result<Piece, ChessErrors> {
    let mut words = text.split_whitespace();
    let parsed = match (words.next(), words.next(), words.next()) {
        (Some(color), Some(kind), None) => TeamColor::from_name(color).zip(PieceType::from_name(kind)),
        _ => None,
    };

    parsed
        .map(|(color, piece_type)| Piece::new(color, piece_type))
        .ok_or_else(|| ChessErrors::InvalidWireFormat(format!("unknown piece '{text}'")))
}

impl GameSnapshot {
    pub fn from_game(game: &Game) -> Self {
        let board = game.board();
        let mut rows = Vec::with_capacity(8);
        let mut pieces_moved = Vec::new();
        let mut pawns_just_double_moved = Vec::new();

        for row in 1..=8 {
            let mut cells = Vec::with_capacity(8);
            for column in 1..=8 {
                let position = Position::new(row, column);
                let cell = board.get_piece(position).map(|piece| {
                    if piece.has_moved {
                        pieces_moved.push(position.to_string());
                    }
                    if piece.just_double_moved {
                        pawns_just_double_moved.push(position.to_string());
                    }
                    piece_to_wire(&piece)
                });
                cells.push(cell);
            }
            rows.push(cells);
        }

        Self {
            board: rows,
            turn: game.team_turn(),
            pieces_moved,
            pawns_just_double_moved,
        }
    }

    pub fn to_game(&self) -> Result<Game, ChessErrors> {
        if self.board.len() != 8 || self.board.iter().any(|row| row.len() != 8) {
            return Err(ChessErrors::InvalidWireFormat(
                "board must be 8 rows of 8 cells".to_owned(),
            ));
        }

        let mut board = Board::new();
        for (row_idx, cells) in self.board.iter().enumerate() {
            for (column_idx, cell) in cells.iter().enumerate() {
                if let Some(text) = cell {
                    let position = Position::new(row_idx as i8 + 1, column_idx as i8 + 1);
                    board.set_piece(position, Some(piece_from_wire(text)?));
                }
            }
        }

        for square in &self.pieces_moved {
            let piece = flagged_piece(&mut board, square)?;
            piece.has_moved = true;
        }

        for square in &self.pawns_just_double_moved {
            let piece = flagged_piece(&mut board, square)?;
            if piece.piece_type != PieceType::Pawn {
                return Err(ChessErrors::InvalidWireFormat(format!(
                    "{square} is flagged as a double-moved pawn but holds a {}",
                    piece.piece_type
                )));
            }
            piece.just_double_moved = true;
        }

        Ok(Game::from_board(board, self.turn))
    }
}

fn flagged_piece<'a>(board: &'a mut Board, square: &str) -> Result<&'a mut Piece, ChessErrors> {
    let position = algebraic_to_position(square)?;
    board
        .piece_mut(position)
        .ok_or_else(|| ChessErrors::InvalidWireFormat(format!("flag on empty square {square}")))
}

impl WireMove {
    pub fn from_move(mv: &Move) -> Result<Self, ChessErrors> {
        Ok(Self {
            start: position_to_algebraic(mv.start)?,
            end: position_to_algebraic(mv.end)?,
            promotion: mv.promotion,
        })
    }

    /// Decodes to a bare move; castling and en passant are recognised when
    /// the move is played.
    pub fn to_move(&self) -> Result<Move, ChessErrors> {
        if let Some(promotion) = self.promotion {
            if !promotion.is_promotion_choice() {
                return Err(ChessErrors::IllegalPieceType(promotion));
            }
        }
        Ok(Move::new(
            algebraic_to_position(&self.start)?,
            algebraic_to_position(&self.end)?,
            self.promotion,
        ))
    }
}

pub fn game_to_json(game: &Game) -> Result<String, ChessErrors> {
    serde_json::to_string(&GameSnapshot::from_game(game))
        .map_err(|err| ChessErrors::InvalidWireFormat(err.to_string()))
}

pub fn game_from_json(json: &str) -> Result<Game, ChessErrors> {
    let snapshot: GameSnapshot =
        serde_json::from_str(json).map_err(|err| ChessErrors::InvalidWireFormat(err.to_string()))?;
    snapshot.to_game()
}

pub fn move_from_json(json: &str) -> Result<Move, ChessErrors> {
    let wire: WireMove =
        serde_json::from_str(json).map_err(|err| ChessErrors::InvalidWireFormat(err.to_string()))?;
    wire.to_move()
}
