//! Automated episode driver and parallel batch statistics.

use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tessera_core::Board;
use tessera_engine::{Session, SpawnConfig};

use crate::lookahead::LookaheadSearch;

/// Outcome of one automated game.
#[derive(Clone, Debug)]
pub struct EpisodeOutcome {
    pub seed: u64,
    pub turns: u32,
    pub final_board: Board,
    pub max_exponent: u8,
    pub tile_sum: u64,
}

/// Aggregates over a batch of independent episodes.
#[derive(Clone, Debug)]
pub struct BatchOutcome {
    pub episodes: u32,
    pub mean_turns: f64,
    pub mean_tile_sum: f64,
    pub best_tile_sum: u64,
    pub best_exponent: u8,
    /// How many episodes peaked at each exponent.
    pub exponent_counts: FxHashMap<u8, u32>,
}

/// Drive one session with the search policy until it is lost, or until
/// `max_turns` moves have been made (0 = unlimited).
pub fn play_episode(
    seed: u64,
    spawn: SpawnConfig,
    search: &LookaheadSearch,
    max_turns: u32,
) -> EpisodeOutcome {
    let mut session = Session::with_config(seed, spawn);
    loop {
        if max_turns > 0 && session.turn() >= max_turns {
            break;
        }
        match search.best_move(&session.board()) {
            Some((direction, _)) => {
                // best_move only offers directions that change the board
                if session.apply(direction).is_none() {
                    break;
                }
            }
            None => {
                session.check_lost();
                break;
            }
        }
    }
    let final_board = session.board();
    EpisodeOutcome {
        seed,
        turns: session.turn(),
        max_exponent: final_board.max_exponent(),
        tile_sum: final_board.tile_sum(),
        final_board,
    }
}

/// Run `episodes` independent games in parallel, seeded `base_seed + i`.
pub fn run_batch(
    base_seed: u64,
    episodes: u32,
    spawn: SpawnConfig,
    search: &LookaheadSearch,
    max_turns: u32,
) -> BatchOutcome {
    let outcomes: Vec<EpisodeOutcome> = (0..episodes as u64)
        .into_par_iter()
        .map(|i| play_episode(base_seed.wrapping_add(i), spawn, search, max_turns))
        .collect();

    let mut exponent_counts = FxHashMap::default();
    let mut turns_total = 0u64;
    let mut sum_total = 0u64;
    let mut best_tile_sum = 0u64;
    let mut best_exponent = 0u8;
    for outcome in &outcomes {
        turns_total += outcome.turns as u64;
        sum_total += outcome.tile_sum;
        best_tile_sum = best_tile_sum.max(outcome.tile_sum);
        best_exponent = best_exponent.max(outcome.max_exponent);
        *exponent_counts.entry(outcome.max_exponent).or_insert(0) += 1;
    }

    let denom = episodes.max(1) as f64;
    BatchOutcome {
        episodes,
        mean_turns: turns_total as f64 / denom,
        mean_tile_sum: sum_total as f64 / denom,
        best_tile_sum,
        best_exponent,
        exponent_counts,
    }
}
