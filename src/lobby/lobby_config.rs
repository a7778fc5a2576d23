//! Lobby tunables.
//!
//! Values come from `Default`, then the `PLUM_LOBBY_*` environment variables,
//! then explicit `set_option` calls.

use log::warn;

pub const ENV_MAX_GAMES: &str = "PLUM_LOBBY_MAX_GAMES";
pub const ENV_ENFORCE_TURNS: &str = "PLUM_LOBBY_ENFORCE_TURNS";
pub const ENV_LOCK_FINISHED: &str = "PLUM_LOBBY_LOCK_FINISHED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyConfig {
    /// Creation beyond this many stored games fails with `StoreFull`.
    pub max_games: usize,
    /// Only the player seated at the side to move may submit a move.
    pub enforce_player_turns: bool,
    /// Checkmated and stalemated games accept no further moves.
    pub reject_moves_after_game_over: bool,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            max_games: 1024,
            enforce_player_turns: true,
            reject_moves_after_game_over: true,
        }
    }
}

impl LobbyConfig {
    /// Defaults overridden by any `PLUM_LOBBY_*` variables that are set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        for (var, option) in [
            (ENV_MAX_GAMES, "MaxGames"),
            (ENV_ENFORCE_TURNS, "EnforceTurns"),
            (ENV_LOCK_FINISHED, "LockFinished"),
        ] {
            if let Ok(value) = std::env::var(var) {
                if let Err(err) = config.set_option(option, &value) {
                    warn!("ignoring {var}: {err}");
                }
            }
        }
        config
    }

    /// Sets one option by name. Names are case-insensitive; unknown names are
    /// ignored.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("MaxGames") {
            let parsed = value
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid MaxGames value '{value}'"))?;
            self.max_games = parsed.max(1);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("EnforceTurns") {
            self.enforce_player_turns = parse_switch(name, value)?;
            return Ok(());
        }
        if name.eq_ignore_ascii_case("LockFinished") {
            self.reject_moves_after_game_over = parse_switch(name, value)?;
            return Ok(());
        }
        Ok(())
    }
}

fn parse_switch(name: &str, value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(format!("invalid {name} value '{value}'")),
    }
}
