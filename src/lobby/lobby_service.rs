//! Game lobby: create, list, join, observe and play stored games.
//!
//! The service owns a [`GameStore`] and never edits a stored game in place.
//! A submitted move is played on a copy of the game and the record is
//! replaced only if the engine accepts it, so a rejected move leaves storage
//! untouched. Calls take `&mut self`; callers sharing a service across
//! threads wrap it in a `Mutex`.

use log::{debug, info, warn};

use crate::game_state::chess_types::TeamColor;
use crate::lobby::game_record::{GameId, GameSummary};
use crate::lobby::game_store::{GameStore, MemoryGameStore};
use crate::lobby::lobby_config::LobbyConfig;
use crate::lobby::lobby_errors::LobbyErrors;
use crate::move_generation::legal_move_generator::GameStatus;
use crate::moves::chess_move::Move;
use crate::utils::wire_format::{move_from_json, GameSnapshot};

pub struct LobbyService<S: GameStore> {
    store: S,
    config: LobbyConfig,
}

impl LobbyService<MemoryGameStore> {
    pub fn in_memory(config: LobbyConfig) -> Self {
        Self::new(MemoryGameStore::new(), config)
    }
}

impl<S: GameStore> LobbyService<S> {
    pub fn new(store: S, config: LobbyConfig) -> Self {
        Self { store, config }
    }

    #[inline]
    pub fn config(&self) -> &LobbyConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_game(&mut self, game_name: &str) -> Result<GameId, LobbyErrors> {
        let game_name = game_name.trim();
        if game_name.is_empty() {
            return Err(LobbyErrors::BadRequest("game name is required".to_owned()));
        }
        if self.store.len() >= self.config.max_games {
            return Err(LobbyErrors::StoreFull(self.config.max_games));
        }

        let game_id = self.store.create(game_name)?;
        debug!("created game {game_id} '{game_name}'");
        Ok(game_id)
    }

    pub fn list_games(&self) -> Vec<GameSummary> {
        self.store.list().iter().map(|record| record.summary()).collect()
    }

    /// Seats `username` at `color`. Fails if the seat is already taken.
    pub fn join_game(&mut self, game_id: GameId, color: TeamColor, username: &str) -> Result<(), LobbyErrors> {
        if username.trim().is_empty() {
            return Err(LobbyErrors::BadRequest("username is required".to_owned()));
        }

        let mut record = self.store.get(game_id)?;
        if record.is_color_taken(color) {
            return Err(LobbyErrors::ColorAlreadyTaken(color));
        }

        record.add_player(color, username);
        self.store.replace(record)?;
        debug!("{username} joined game {game_id} as {color}");
        Ok(())
    }

    /// Current position of a game, for players and spectators alike.
    pub fn observe_game(&self, game_id: GameId) -> Result<GameSnapshot, LobbyErrors> {
        let record = self.store.get(game_id)?;
        Ok(GameSnapshot::from_game(&record.game))
    }

    /// Plays `mv` for `username` and returns the status of the side now to
    /// move.
    pub fn submit_move(&mut self, game_id: GameId, username: &str, mv: Move) -> Result<GameStatus, LobbyErrors> {
        let mut record = self.store.get(game_id)?;
        let turn = record.game.team_turn();

        if self.config.enforce_player_turns && record.username_for(turn) != Some(username) {
            return Err(match record.seat_of(username) {
                Some(_) => LobbyErrors::NotYourTurn(turn),
                None => LobbyErrors::NotAPlayer(username.to_owned()),
            });
        }

        if self.config.reject_moves_after_game_over && record.game.game_status().is_over() {
            return Err(LobbyErrors::GameOver);
        }

        let mut next = record.game.clone();
        if let Err(err) = next.make_move(mv) {
            warn!("game {game_id}: rejected {mv} from {username}: {err}");
            return Err(err.into());
        }

        let status = next.game_status();
        record.game = next;
        self.store.replace(record)?;

        debug!("game {game_id}: {username} played {mv}");
        if status.is_over() {
            info!("game {game_id} finished: {status}");
        }
        Ok(status)
    }

    /// [`submit_move`](Self::submit_move) for a JSON-encoded move.
    pub fn submit_wire_move(&mut self, game_id: GameId, username: &str, json: &str) -> Result<GameStatus, LobbyErrors> {
        let mv = move_from_json(json)?;
        self.submit_move(game_id, username, mv)
    }

    /// Drops every stored game.
    pub fn clear(&mut self) {
        self.store.clear();
        debug!("lobby cleared");
    }
}
