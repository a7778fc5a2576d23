//! Storage seam for game records.
//!
//! The lobby talks to storage only through [`GameStore`]. `replace` swaps a
//! whole record so a partially applied move is never visible.

use std::collections::BTreeMap;

use crate::lobby::game_record::{GameId, GameRecord};
use crate::lobby::lobby_errors::LobbyErrors;

pub trait GameStore {
    /// Stores a fresh game and returns its id.
    fn create(&mut self, game_name: &str) -> Result<GameId, LobbyErrors>;

    fn get(&self, game_id: GameId) -> Result<GameRecord, LobbyErrors>;

    /// Every stored game ordered by id.
    fn list(&self) -> Vec<GameRecord>;

    fn replace(&mut self, record: GameRecord) -> Result<(), LobbyErrors>;

    fn clear(&mut self);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process store with sequential ids starting at 1.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: BTreeMap<GameId, GameRecord>,
    next_id: GameId,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryGameStore {
    fn create(&mut self, game_name: &str) -> Result<GameId, LobbyErrors> {
        self.next_id += 1;
        let game_id = self.next_id;
        self.games.insert(game_id, GameRecord::new(game_id, game_name));
        Ok(game_id)
    }

    fn get(&self, game_id: GameId) -> Result<GameRecord, LobbyErrors> {
        self.games
            .get(&game_id)
            .cloned()
            .ok_or(LobbyErrors::GameNotFound(game_id))
    }

    fn list(&self) -> Vec<GameRecord> {
        self.games.values().cloned().collect()
    }

    fn replace(&mut self, record: GameRecord) -> Result<(), LobbyErrors> {
        match self.games.get_mut(&record.game_id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(LobbyErrors::GameNotFound(record.game_id)),
        }
    }

    fn clear(&mut self) {
        self.games.clear();
        self.next_id = 0;
    }

    fn len(&self) -> usize {
        self.games.len()
    }
}
