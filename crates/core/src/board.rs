//! board representation - 16 tile exponents stored row-major
//! a cell value v > 0 stands for the tile 2^v, 0 is an empty cell

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// 4x4 2048 board storing tile exponents row-major.
/// Index 0 is the top-left cell, index 15 the bottom-right.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Board {
    cells: [u8; Board::CELLS],
}

impl Board {
    pub const SIZE: usize = 4;
    pub const CELLS: usize = 16;
    /// 2^17 = 131072 is the largest tile reachable on a 4x4 board.
    pub const MAX_EXPONENT: u8 = 17;

    pub const EMPTY: Board = Board {
        cells: [0; Board::CELLS],
    };

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn from_exponents(cells: [u8; Board::CELLS]) -> Self {
        Self { cells }
    }

    #[inline(always)]
    pub fn get(&self, idx: usize) -> u8 {
        self.cells[idx]
    }

    /// Get all cells as a slice - for bulk board operations
    #[inline]
    pub fn cells(&self) -> &[u8; Board::CELLS] {
        &self.cells
    }

    /// Copy of this board with a single cell replaced.
    #[inline]
    pub fn with_cell(&self, idx: usize, value: u8) -> Self {
        let mut cells = self.cells;
        cells[idx] = value;
        Self { cells }
    }

    /// Face value of the tile at `idx` (0 for an empty cell).
    #[inline]
    pub fn tile_value(&self, idx: usize) -> u32 {
        match self.cells[idx] {
            0 => 0,
            v => 1u32 << v,
        }
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == 0)
            .map(|(idx, _)| idx)
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    pub fn max_exponent(&self) -> u8 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Total face value of all tiles. Moves preserve this sum exactly
    /// (a merge turns 2^v + 2^v into 2^(v+1)); only spawns grow it.
    pub fn tile_sum(&self) -> u64 {
        self.cells
            .iter()
            .map(|&v| if v == 0 { 0u64 } else { 1u64 << v })
            .sum()
    }
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.cells.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let vec: Vec<u8> = Vec::deserialize(deserializer)?;
        if vec.len() != Board::CELLS {
            return Err(serde::de::Error::custom("expected 16 cells"));
        }
        let mut cells = [0u8; Board::CELLS];
        for (idx, &value) in vec.iter().enumerate() {
            if value > Board::MAX_EXPONENT {
                return Err(serde::de::Error::custom("tile exponent out of range"));
            }
            cells[idx] = value;
        }
        Ok(Board { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Decimal values up to 8192 fit the 4-wide cell; larger tiles
        // fall back to power notation.
        for row in 0..Self::SIZE {
            writeln!(f, "+----+----+----+----+")?;
            write!(f, "|")?;
            for col in 0..Self::SIZE {
                let v = self.cells[row * Self::SIZE + col];
                if v == 0 {
                    write!(f, "    |")?;
                } else if v <= 13 {
                    write!(f, "{:^4}|", 1u32 << v)?;
                } else {
                    write!(f, "{:^4}|", format!("2^{}", v))?;
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "+----+----+----+----+")
    }
}
