use tessera_core::{Board, Direction};
use tessera_engine::shift;
use tessera_eval::{fitness, Score};

/// Highest fitness reachable from `board` within `depth` plies of the
/// player's own moves. Random spawns between plies are not modeled;
/// children are scored as if no tile appeared. Negative infinity means
/// no direction changes the board, which only happens at a lost root.
pub fn best_fitness(board: &Board, depth: u32) -> Score {
    if depth == 0 {
        return fitness(board);
    }
    let mut best = Score::NEG_INFINITY;
    for direction in Direction::ALL {
        if let Some(child) = shift(*board, direction) {
            let score = best_fitness(&child, depth - 1);
            if score > best {
                best = score;
            }
        }
    }
    best
}

/// Per-direction fitness snapshot of one position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionEval {
    pub direction: Direction,
    /// None when the direction leaves the board unchanged.
    pub fitness: Option<Score>,
}

/// Move policy: score each direction's child with [`best_fitness`] and
/// take the strict maximum.
#[derive(Clone, Copy, Debug, Default)]
pub struct LookaheadSearch {
    pub depth: u32,
}

impl LookaheadSearch {
    pub const MAX_DEPTH: u32 = 6;

    /// Depth 0 scores children by immediate fitness (the greedy player).
    pub fn new(depth: u32) -> Self {
        Self {
            depth: depth.min(Self::MAX_DEPTH),
        }
    }

    /// Direction with the best lookahead fitness, with ties keeping the
    /// earliest direction in [`Direction::ALL`] order. None means no
    /// direction changes the board: the position is lost.
    pub fn best_move(&self, board: &Board) -> Option<(Direction, Score)> {
        let mut best: Option<(Direction, Score)> = None;
        for direction in Direction::ALL {
            if let Some(child) = shift(*board, direction) {
                let score = best_fitness(&child, self.depth);
                let replace = match best {
                    Some((_, incumbent)) => score > incumbent,
                    None => true,
                };
                if replace {
                    best = Some((direction, score));
                }
            }
        }
        best
    }

    /// Score all four directions. Unchanged directions carry no fitness;
    /// callers must not substitute the pre-move board's score for them.
    pub fn evaluate_directions(&self, board: &Board) -> [DirectionEval; 4] {
        Direction::ALL.map(|direction| DirectionEval {
            direction,
            fitness: shift(*board, direction).map(|child| best_fitness(&child, self.depth)),
        })
    }
}
