//! Errors reported by the lobby service.

use std::error::Error;
use std::fmt;

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::TeamColor;
use crate::lobby::game_record::GameId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LobbyErrors {
    /// Missing or malformed request data, such as an empty game name.
    BadRequest(String),
    GameNotFound(GameId),
    ColorAlreadyTaken(TeamColor),
    /// The username is not seated in the game.
    NotAPlayer(String),
    /// The submitting player is seated but the other color is on move.
    NotYourTurn(TeamColor),
    GameOver,
    /// The engine refused the move; the stored game is unchanged.
    MoveRejected(ChessErrors),
    /// The store already holds the configured maximum number of games.
    StoreFull(usize),
}

impl fmt::Display for LobbyErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LobbyErrors::BadRequest(msg) => write!(f, "bad request: {msg}"),
            LobbyErrors::GameNotFound(id) => write!(f, "game {id} does not exist"),
            LobbyErrors::ColorAlreadyTaken(color) => write!(f, "{color} is already taken"),
            LobbyErrors::NotAPlayer(username) => write!(f, "{username} is not playing this game"),
            LobbyErrors::NotYourTurn(turn) => write!(f, "it is {turn}'s turn"),
            LobbyErrors::GameOver => f.write_str("the game is over"),
            LobbyErrors::MoveRejected(err) => write!(f, "move rejected: {err}"),
            LobbyErrors::StoreFull(max) => write!(f, "game store is full ({max} games)"),
        }
    }
}

impl Error for LobbyErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LobbyErrors::MoveRejected(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ChessErrors> for LobbyErrors {
    fn from(err: ChessErrors) -> Self {
        match err {
            ChessErrors::InvalidMove(_) | ChessErrors::IllegalPieceType(_) => LobbyErrors::MoveRejected(err),
            other => LobbyErrors::BadRequest(other.to_string()),
        }
    }
}
