//! Random tile injection onto empty cells.

use rand::Rng;
use tessera_core::Board;

/// Spawn weighting. A new tile has exponent 2 (a face-value 4) with
/// probability 1 in `four_odds`, exponent 1 (a face-value 2) otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpawnConfig {
    pub four_odds: u32,
}

impl SpawnConfig {
    /// Mainline 9:1 two-to-four ratio.
    pub fn standard() -> Self {
        Self { four_odds: 10 }
    }

    /// 4:1 variant with noticeably more fours.
    pub fn four_heavy() -> Self {
        Self { four_odds: 5 }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Place one new tile on a uniformly chosen empty cell.
///
/// Panics when the board is full; callers check for empties first. A
/// board produced by a successful shift always has at least one.
pub fn spawn_tile<R: Rng + ?Sized>(board: Board, config: SpawnConfig, rng: &mut R) -> Board {
    let empty = board.count_empty();
    assert!(empty > 0, "spawn_tile needs an empty cell");

    let pick = rng.gen_range(0..empty);
    let exponent = if rng.gen_range(0..config.four_odds) == 0 {
        2
    } else {
        1
    };

    let mut seen = 0;
    for idx in 0..Board::CELLS {
        if board.get(idx) == 0 {
            if seen == pick {
                return board.with_cell(idx, exponent);
            }
            seen += 1;
        }
    }
    unreachable!("count_empty reported {} empty cells", empty)
}
