//! Board transform - every direction reduces to a left shift via rotation.
//! A shift that leaves the board bit-for-bit identical returns None.

use tessera_core::{Board, Direction};

/// Counter-clockwise quarter-turn permutation: output cell i takes its
/// value from input cell ROTATE_CCW[i].
const ROTATE_CCW: [usize; Board::CELLS] = [
    3, 7, 11, 15, //
    2, 6, 10, 14, //
    1, 5, 9, 13, //
    0, 4, 8, 12,
];

/// Rotate the board counter-clockwise by `quarters` quarter-turns.
/// Four quarter-turns restore the original board.
pub fn rotate_ccw(board: Board, quarters: usize) -> Board {
    let mut cells = *board.cells();
    for _ in 0..(quarters & 3) {
        let prev = cells;
        for (idx, &src) in ROTATE_CCW.iter().enumerate() {
            cells[idx] = prev[src];
        }
    }
    Board::from_exponents(cells)
}

/// Compact one row leftward: slide tiles over empties, then merge each
/// adjacent equal pair into one tile of the next exponent. A merged tile
/// never merges again within the same shift, and a run of three equal
/// tiles merges only its leftmost pair.
pub fn shift_row_left(row: [u8; 4]) -> [u8; 4] {
    let mut packed = [0u8; 4];
    let mut len = 0;
    for v in row {
        if v != 0 {
            packed[len] = v;
            len += 1;
        }
    }

    let mut out = [0u8; 4];
    let mut j = 0;
    let mut k = 0;
    while j < len {
        if j + 1 < len && packed[j] == packed[j + 1] {
            out[k] = packed[j] + 1;
            j += 2;
        } else {
            out[k] = packed[j];
            j += 1;
        }
        k += 1;
    }
    out
}

/// Shift every row leftward. Returns None when nothing moved or merged.
pub fn shift_left(board: Board) -> Option<Board> {
    let mut cells = *board.cells();
    for row in 0..Board::SIZE {
        let base = row * Board::SIZE;
        let moved = shift_row_left([
            cells[base],
            cells[base + 1],
            cells[base + 2],
            cells[base + 3],
        ]);
        cells[base..base + Board::SIZE].copy_from_slice(&moved);
    }
    let result = Board::from_exponents(cells);
    if result == board {
        None
    } else {
        Some(result)
    }
}

/// Shift the board in `direction`. Non-left directions rotate onto the
/// left axis, shift, and rotate back. Returns None when the board is
/// unchanged; that sentinel is the sole legality signal.
pub fn shift(board: Board, direction: Direction) -> Option<Board> {
    let turns = direction.quarter_turns();
    if turns == 0 {
        return shift_left(board);
    }
    shift_left(rotate_ccw(board, turns)).map(|moved| rotate_ccw(moved, 4 - turns))
}

/// True when no direction changes the board.
pub fn is_terminal(board: Board) -> bool {
    Direction::ALL
        .iter()
        .all(|&direction| shift(board, direction).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: [u8; 16]) -> Board {
        Board::from_exponents(cells)
    }

    #[test]
    fn test_rotation_round_trip() {
        let b = board([1, 2, 3, 4, 0, 0, 0, 0, 5, 6, 7, 8, 0, 9, 0, 0]);
        assert_eq!(rotate_ccw(rotate_ccw(b, 1), 3), b);
        assert_eq!(rotate_ccw(rotate_ccw(b, 2), 2), b);
        assert_eq!(rotate_ccw(b, 0), b);
    }

    #[test]
    fn test_rotation_moves_top_right_to_top_left() {
        let b = Board::new().with_cell(3, 5);
        let rotated = rotate_ccw(b, 1);
        assert_eq!(rotated.get(0), 5);
        assert_eq!(rotated.count_empty(), 15);
    }

    #[test]
    fn test_row_slide_without_merge() {
        assert_eq!(shift_row_left([0, 1, 0, 2]), [1, 2, 0, 0]);
        assert_eq!(shift_row_left([0, 0, 0, 3]), [3, 0, 0, 0]);
    }

    #[test]
    fn test_row_merges_equal_pair() {
        assert_eq!(shift_row_left([1, 1, 0, 0]), [2, 0, 0, 0]);
        assert_eq!(shift_row_left([0, 2, 0, 2]), [3, 0, 0, 0]);
    }

    #[test]
    fn test_row_triple_merges_leftmost_pair_only() {
        assert_eq!(shift_row_left([1, 1, 1, 0]), [2, 1, 0, 0]);
        assert_eq!(shift_row_left([2, 2, 2, 2]), [3, 3, 0, 0]);
    }

    #[test]
    fn test_row_merged_tile_does_not_cascade() {
        // [2,1,1] merges to [2,2] but the fresh 2 must not merge again
        assert_eq!(shift_row_left([2, 1, 1, 0]), [2, 2, 0, 0]);
    }

    #[test]
    fn test_row_all_empty_stays_empty() {
        assert_eq!(shift_row_left([0, 0, 0, 0]), [0, 0, 0, 0]);
    }

    #[test]
    fn test_shift_left_concrete() {
        let b = board([1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let moved = shift(b, Direction::Left).expect("board changes");
        assert_eq!(
            moved,
            board([2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_shift_left_unchanged_is_none() {
        let b = board([1, 2, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(shift(b, Direction::Left), None);
    }

    #[test]
    fn test_shift_right() {
        let b = board([1, 1, 0, 0, 3, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0]);
        let moved = shift(b, Direction::Right).expect("board changes");
        assert_eq!(
            moved,
            board([0, 0, 0, 2, 0, 0, 3, 2, 0, 0, 0, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_shift_up_merges_column() {
        let b = board([0, 2, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0]);
        let moved = shift(b, Direction::Up).expect("board changes");
        assert_eq!(
            moved,
            board([0, 3, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0])
        );
    }

    #[test]
    fn test_shift_down() {
        let b = board([0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0]);
        let moved = shift(b, Direction::Down).expect("board changes");
        assert_eq!(
            moved,
            board([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0])
        );
    }

    #[test]
    fn test_empty_board_has_no_moves() {
        for direction in Direction::ALL {
            assert_eq!(shift(Board::EMPTY, direction), None);
        }
    }

    #[test]
    fn test_rigid_board_is_terminal() {
        let b = board([1, 2, 1, 2, 2, 1, 2, 1, 1, 2, 1, 2, 2, 1, 2, 1]);
        assert!(is_terminal(b));
        for direction in Direction::ALL {
            assert_eq!(shift(b, direction), None);
        }
    }

    #[test]
    fn test_full_board_with_merge_is_not_terminal() {
        let b = board([1, 1, 2, 1, 2, 3, 1, 2, 1, 2, 3, 1, 2, 1, 2, 3]);
        assert!(!is_terminal(b));
    }
}
