//! A stored game: the engine state plus who is sitting at which side.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::game_state::chess_types::TeamColor;
use crate::game_state::game_state::Game;

pub type GameId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub game_id: GameId,
    pub game_name: String,
    pub white_username: Option<String>,
    pub black_username: Option<String>,
    pub created_at: DateTime<Utc>,
    pub game: Game,
}

/// Listing entry returned to clients; omits the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub game_id: GameId,
    pub game_name: String,
    pub white_username: Option<String>,
    pub black_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl GameRecord {
    /// A fresh game at the starting position with both seats open.
    pub fn new(game_id: GameId, game_name: &str) -> Self {
        Self {
            game_id,
            game_name: game_name.to_owned(),
            white_username: None,
            black_username: None,
            created_at: Utc::now(),
            game: Game::new_game(),
        }
    }

    pub fn username_for(&self, color: TeamColor) -> Option<&str> {
        match color {
            TeamColor::White => self.white_username.as_deref(),
            TeamColor::Black => self.black_username.as_deref(),
        }
    }

    #[inline]
    pub fn is_color_taken(&self, color: TeamColor) -> bool {
        self.username_for(color).is_some()
    }

    /// Seats `username` at `color`, replacing whoever was there.
    pub fn add_player(&mut self, color: TeamColor, username: &str) {
        let seat = match color {
            TeamColor::White => &mut self.white_username,
            TeamColor::Black => &mut self.black_username,
        };
        *seat = Some(username.to_owned());
    }

    /// The color `username` plays. White is reported first when one user
    /// holds both seats.
    pub fn seat_of(&self, username: &str) -> Option<TeamColor> {
        [TeamColor::White, TeamColor::Black]
            .into_iter()
            .find(|&color| self.username_for(color) == Some(username))
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            game_id: self.game_id,
            game_name: self.game_name.clone(),
            white_username: self.white_username.clone(),
            black_username: self.black_username.clone(),
            created_at: self.created_at,
        }
    }
}
