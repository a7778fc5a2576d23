//! Perft: counts leaf positions of the legal move tree.
//!
//! Used to validate the generator against published node counts. Leaf
//! statistics follow the usual perft tables.

use std::thread;

use crate::game_state::game_state::Game;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Node count only; skips the per-leaf statistics.
pub fn perft_nodes(game: &Game, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = game.all_valid_moves(game.team_turn());
    if depth == 1 {
        return moves.len();
    }

    moves
        .iter()
        .map(|mv| {
            let mut next = game.clone();
            next.apply_unchecked(mv);
            perft_nodes(&next, depth - 1)
        })
        .sum()
}

pub fn perft(game: &Game, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game.all_valid_moves(game.team_turn()) {
        perft_recurse(game, &mv, depth, &mut total);
    }
    total
}

/// Splits the root moves across threads. `Game` has no shared mutable state,
/// so each worker owns a clone.
pub fn perft_multi_threaded(game: &Game, depth: u8) -> PerftCounts {
    if depth == 0 {
        return perft(game, depth);
    }

    let root_moves = game.all_valid_moves(game.team_turn());
    let mut total = PerftCounts::default();

    thread::scope(|scope| {
        let handles: Vec<_> = root_moves
            .iter()
            .map(|mv| {
                scope.spawn(move || {
                    let mut local = PerftCounts::default();
                    perft_recurse(game, mv, depth, &mut local);
                    local
                })
            })
            .collect();

        for handle in handles {
            match handle.join() {
                Ok(local) => total.merge(local),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }
    });

    total
}

fn perft_recurse(game: &Game, mv: &Move, depth: u8, counts: &mut PerftCounts) {
    let is_capture = mv.is_en_passant || game.board().get_piece(mv.end).is_some();
    let mut next = game.clone();
    next.apply_unchecked(mv);

    if depth == 1 {
        counts.nodes += 1;
        if is_capture {
            counts.captures += 1;
        }
        if mv.is_en_passant {
            counts.en_passant += 1;
        }
        if mv.is_castle {
            counts.castles += 1;
        }
        if mv.promotion.is_some() {
            counts.promotions += 1;
        }
        let defender = next.team_turn();
        if next.is_in_check(defender) {
            counts.checks += 1;
            if !next.has_any_valid_move(defender) {
                counts.checkmates += 1;
            }
        }
        return;
    }

    for child in next.all_valid_moves(next.team_turn()) {
        perft_recurse(&next, &child, depth - 1, counts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let game = Game::new_game();
        assert_eq!(
            perft(&game, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
        assert_eq!(perft_nodes(&game, 0), 1);
    }

    #[test]
    fn startpos_depth_two() {
        let game = Game::new_game();
        let counts = perft(&game, 2);
        assert_eq!(counts.nodes, 400);
        assert_eq!(counts.captures, 0);
        assert_eq!(perft_nodes(&game, 2), 400);
    }

    #[test]
    fn threaded_perft_matches_single_thread() {
        let game = Game::new_game();
        assert_eq!(perft_multi_threaded(&game, 2), perft(&game, 2));
    }
}
