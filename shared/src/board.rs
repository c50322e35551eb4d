use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::GameError;
use crate::row_reducer::{self, Line};
use crate::validation::validate_cells;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];
}

/// 4x4 grid stored row-major. 0 is an empty cell.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([u32; CELL_COUNT]);

/// Outcome of sliding a board, before any tile is spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub board: Board,
    pub score_delta: u32,
    pub changed: bool,
    /// Cells holding a tile produced by a merge, row-major indices.
    pub merged: Vec<usize>,
    /// Cells whose value differs from the input board.
    pub moved: Vec<usize>,
}

impl Board {
    pub const EMPTY: Board = Board([0; CELL_COUNT]);

    /// Builds a board from row-major cells, rejecting values that are not
    /// 0 or a power of two.
    pub fn from_cells(cells: [u32; CELL_COUNT]) -> Result<Self, GameError> {
        validate_cells(&cells).map_err(|(index, _)| GameError::InvalidCell {
            index,
            value: cells[index],
        })?;
        Ok(Board(cells))
    }

    pub fn from_rows(rows: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, GameError> {
        let mut cells = [0; CELL_COUNT];
        for (r, row) in rows.iter().enumerate() {
            cells[r * BOARD_SIZE..(r + 1) * BOARD_SIZE].copy_from_slice(row);
        }
        Self::from_cells(cells)
    }

    pub fn cells(&self) -> &[u32; CELL_COUNT] {
        &self.0
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[row * BOARD_SIZE + col]
    }

    pub(crate) fn set_index(&mut self, index: usize, value: u32) {
        self.0[index] = value;
    }

    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.0.chunks(BOARD_SIZE).map(|row| row.to_vec()).collect()
    }

    /// Empty cell indices in row-major order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| (v == 0).then_some(i))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.0.iter().filter(|&&v| v == 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&v| v == 0)
    }

    pub fn max_tile(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }

    pub fn sum(&self) -> u64 {
        self.0.iter().map(|&v| u64::from(v)).sum()
    }

    /// Cell indices of line `k` ordered so that motion in `dir` points at
    /// position 0 of the line.
    fn line_indices(dir: Direction, k: usize) -> [usize; BOARD_SIZE] {
        let mut out = [0; BOARD_SIZE];
        for (p, slot) in out.iter_mut().enumerate() {
            let q = BOARD_SIZE - 1 - p;
            *slot = match dir {
                Direction::Left => k * BOARD_SIZE + p,
                Direction::Right => k * BOARD_SIZE + q,
                Direction::Up => p * BOARD_SIZE + k,
                Direction::Down => q * BOARD_SIZE + k,
            };
        }
        out
    }

    /// Slides and merges every row (Left/Right) or column (Up/Down).
    /// Does not spawn a tile.
    pub fn shift(self, dir: Direction) -> Shift {
        let mut next = self;
        let mut score_delta = 0;
        let mut merged = Vec::new();

        for k in 0..BOARD_SIZE {
            let indices = Self::line_indices(dir, k);
            let line: Line = indices.map(|i| self.0[i]);
            let reduced = row_reducer::reduce(line);
            for (p, &i) in indices.iter().enumerate() {
                next.0[i] = reduced.cells[p];
            }
            merged.extend(reduced.merged_positions().map(|p| indices[p]));
            score_delta += reduced.score_delta;
        }
        merged.sort_unstable();

        let moved: Vec<usize> = (0..CELL_COUNT).filter(|&i| self.0[i] != next.0[i]).collect();

        Shift {
            board: next,
            score_delta,
            changed: !moved.is_empty(),
            merged,
            moved,
        }
    }

    pub fn can_shift(&self, dir: Direction) -> bool {
        self.shift(dir).changed
    }

    /// True while an empty cell or an equal horizontal/vertical pair exists.
    pub fn has_moves(&self) -> bool {
        if self.0.contains(&0) {
            return true;
        }
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let v = self.get(row, col);
                if row + 1 < BOARD_SIZE && v == self.get(row + 1, col) {
                    return true;
                }
                if col + 1 < BOARD_SIZE && v == self.get(row, col + 1) {
                    return true;
                }
            }
        }
        false
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.chunks(BOARD_SIZE) {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| if v == 0 { ".".to_string() } else { v.to_string() })
                .collect();
            writeln!(f, "{}", cells.iter().map(|c| format!("{:>6}", c)).collect::<String>())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [[u32; 4]; 4]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    const MIXED: [[u32; 4]; 4] = [
        [2, 2, 0, 4],
        [0, 4, 4, 4],
        [8, 0, 8, 0],
        [2, 4, 8, 16],
    ];

    #[test]
    fn shift_left_pads_right() {
        let out = board(MIXED).shift(Direction::Left);
        assert_eq!(
            out.board,
            board([[4, 4, 0, 0], [8, 4, 0, 0], [16, 0, 0, 0], [2, 4, 8, 16]])
        );
        assert_eq!(out.score_delta, 4 + 8 + 16);
        assert_eq!(out.merged, vec![0, 4, 8]);
        assert!(out.changed);
    }

    #[test]
    fn shift_right_pads_left() {
        let out = board(MIXED).shift(Direction::Right);
        assert_eq!(
            out.board,
            board([[0, 0, 4, 4], [0, 0, 4, 8], [0, 0, 0, 16], [2, 4, 8, 16]])
        );
        assert_eq!(out.merged, vec![2, 7, 11]);
    }

    #[test]
    fn shift_up_and_down_work_on_columns() {
        let start = board([[2, 0, 0, 0], [2, 0, 0, 4], [4, 0, 0, 4], [4, 0, 2, 8]]);
        let up = start.shift(Direction::Up);
        assert_eq!(
            up.board,
            board([[4, 0, 2, 8], [8, 0, 0, 8], [0, 0, 0, 0], [0, 0, 0, 0]])
        );
        assert_eq!(up.score_delta, 4 + 8 + 8);

        let down = start.shift(Direction::Down);
        assert_eq!(
            down.board,
            board([[0, 0, 0, 0], [0, 0, 0, 0], [4, 0, 0, 8], [8, 0, 2, 8]])
        );
        assert_eq!(down.merged, vec![8, 11, 12]);
    }

    #[test]
    fn down_merges_from_the_bottom() {
        let start = board([[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]]);
        let out = start.shift(Direction::Down);
        assert_eq!(out.board.get(3, 0), 4);
        assert_eq!(out.board.get(2, 0), 2);
        assert_eq!(out.board.get(1, 0), 0);
    }

    #[test]
    fn blocked_shift_reports_unchanged() {
        let start = board([[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let out = start.shift(Direction::Up);
        assert!(!out.changed);
        assert_eq!(out.board, start);
        assert_eq!(out.score_delta, 0);
        assert!(out.moved.is_empty());
        assert!(!start.can_shift(Direction::Left));
        assert!(start.can_shift(Direction::Down));
    }

    #[test]
    fn shift_leaves_input_untouched() {
        let start = board(MIXED);
        let copy = start;
        let _ = start.shift(Direction::Right);
        assert_eq!(start, copy);
    }

    #[test]
    fn shift_conserves_visible_sum() {
        let start = board(MIXED);
        for dir in Direction::ALL {
            assert_eq!(start.shift(dir).board.sum(), start.sum(), "{:?}", dir);
        }
    }

    #[test]
    fn checkerboard_has_no_moves() {
        let start = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(!start.has_moves());
        assert!(Direction::ALL.iter().all(|&d| !start.can_shift(d)));
    }

    #[test]
    fn full_board_with_pair_has_moves() {
        let start = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 2, 8]]);
        assert!(start.has_moves());
    }

    #[test]
    fn rejects_invalid_cells() {
        let err = Board::from_rows([[2, 3, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap_err();
        assert_eq!(err, GameError::InvalidCell { index: 1, value: 3 });
    }

    #[test]
    fn queries() {
        let start = board(MIXED);
        assert_eq!(start.max_tile(), 16);
        assert_eq!(start.count_empty(), 4);
        assert_eq!(start.empty_cells(), vec![2, 4, 9, 11]);
        assert_eq!(start.rows()[3], vec![2, 4, 8, 16]);
        assert!(Board::EMPTY.is_empty());
        assert!(start.to_string().starts_with("     2     2     .     4"));
    }
}
