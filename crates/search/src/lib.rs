//! Tessera search crate - lookahead move selection and batch play.

mod lookahead;
mod runner;

pub use lookahead::{best_fitness, DirectionEval, LookaheadSearch};
pub use runner::{play_episode, run_batch, BatchOutcome, EpisodeOutcome};

use std::cmp::Ordering;

use tessera_eval::Score;

/// Descending comparator for fitness scores; ties collapse to Equal.
pub fn score_cmp(a: Score, b: Score) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}
