//! Move directions, each expressed as counter-clockwise quarter-turns
//! relative to Left.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// Fixed enumeration order, also the tie-break order when several
    /// directions score equally.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Counter-clockwise quarter-turns that map this direction onto Left.
    pub fn quarter_turns(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 3,
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self.quarter_turns()
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Left => "LEFT",
            Self::Up => "UP",
            Self::Right => "RIGHT",
            Self::Down => "DOWN",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_directions() {
        assert_eq!(Direction::ALL.len(), 4);
    }

    #[test]
    fn test_quarter_turns() {
        assert_eq!(Direction::Left.quarter_turns(), 0);
        assert_eq!(Direction::Up.quarter_turns(), 1);
        assert_eq!(Direction::Right.quarter_turns(), 2);
        assert_eq!(Direction::Down.quarter_turns(), 3);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (idx, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), idx);
        }
    }
}
