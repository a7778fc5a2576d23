//! Crate root module declarations for the Plum Lobby chess rules engine.
//!
//! The engine (game state, pseudo-legal move generation, legality filtering
//! and move execution) is usable on its own. The lobby layer stores games
//! behind a pluggable store and exchanges positions and moves as JSON.

pub mod chess_errors;

pub mod game_state {
    pub mod board_position;
    pub mod chess_board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod chess_move;
    pub mod king_moves;
    pub mod pawn_moves;
    pub mod piece_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod lobby {
    pub mod game_record;
    pub mod game_store;
    pub mod lobby_config;
    pub mod lobby_errors;
    pub mod lobby_service;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod wire_format;
}

pub use chess_errors::{ChessErrors, InvalidMoveReason};
pub use game_state::board_position::Position;
pub use game_state::chess_board::Board;
pub use game_state::chess_types::{Piece, PieceType, TeamColor};
pub use game_state::game_state::Game;
pub use move_generation::legal_move_generator::GameStatus;
pub use moves::chess_move::Move;
