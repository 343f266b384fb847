//! Tessera eval crate - the board fitness heuristic.
//!
//! Five additive terms score a position: total tile value, corner
//! anchoring, edge placement, and merge potential along rows and
//! columns. The bases (2, 3, 4) are fixed; downstream rankings depend
//! on their exact values.

use tessera_core::Board;

pub type Score = f64;

/// Corner cells with their two orthogonal edge neighbors.
const CORNERS: [(usize, usize, usize); 4] = [(0, 4, 1), (3, 7, 2), (12, 8, 13), (15, 11, 14)];

/// The eight non-corner edge cells.
const SIDES: [usize; 8] = [1, 2, 4, 7, 8, 11, 13, 14];

/// Score a board. Pure; higher is better.
pub fn fitness(board: &Board) -> Score {
    let cells = board.cells();
    let mut total = 0.0;

    // Total tile value. Empty cells contribute nothing.
    for &v in cells.iter() {
        if v != 0 {
            total += 2f64.powi(v as i32);
        }
    }

    // A corner earns 4^v unless both of its edge neighbors dominate it,
    // i.e. a big tile in the corner is good, a pit in the corner is not.
    for (cell, n1, n2) in CORNERS {
        total += corner_term(cells[cell], cells[n1], cells[n2]);
    }

    // Edge cells earn 3^v regardless of surroundings.
    for idx in SIDES {
        total += 3f64.powi(cells[idx] as i32);
    }

    // Merge potential along rows and columns.
    for row in 0..Board::SIZE {
        for col in 0..Board::SIZE - 1 {
            let idx = row * Board::SIZE + col;
            total += neighbor_term(cells[idx], cells[idx + 1]);
        }
    }
    for idx in 0..Board::CELLS - Board::SIZE {
        total += neighbor_term(cells[idx], cells[idx + Board::SIZE]);
    }

    total
}

/// Fitness of an optional board; an absent board scores negative
/// infinity so it loses every comparison.
pub fn fitness_opt(board: Option<&Board>) -> Score {
    match board {
        Some(board) => fitness(board),
        None => Score::NEG_INFINITY,
    }
}

fn corner_term(v: u8, n1: u8, n2: u8) -> Score {
    if n1 > v && n2 > v {
        0.0
    } else {
        4f64.powi(v as i32)
    }
}

/// Equal neighbors: 3^v. Consecutive exponents both above 8: 2^min.
/// Anything else contributes nothing.
fn neighbor_term(a: u8, b: u8) -> Score {
    if a == b {
        return 3f64.powi(a as i32);
    }
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    if lo + 1 == hi && lo > 3 {
        2f64.powi(lo as i32)
    } else {
        0.0
    }
}
