use crate::constants::BOARD_SIZE;

pub type Line = [u32; BOARD_SIZE];

/// Result of collapsing one line toward index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineReduction {
    pub cells: Line,
    pub score_delta: u32,
    /// `merged[i]` is set when `cells[i]` was produced by a merge this move.
    pub merged: [bool; BOARD_SIZE],
}

impl LineReduction {
    pub fn merged_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.merged
            .iter()
            .enumerate()
            .filter_map(|(i, &m)| m.then_some(i))
    }
}

/// Slides non-zero cells toward index 0, keeping their order. Markers travel
/// with their cell.
fn compact(cells: &mut Line, merged: &mut [bool; BOARD_SIZE]) {
    let mut write = 0;
    for read in 0..BOARD_SIZE {
        if cells[read] != 0 {
            cells[write] = cells[read];
            merged[write] = merged[read];
            write += 1;
        }
    }
    for i in write..BOARD_SIZE {
        cells[i] = 0;
        merged[i] = false;
    }
}

/// Collapses a line with gravity toward index 0.
///
/// Compact, then a single merge scan from the leading edge, then compact
/// again. A cell consumed by a merge is zeroed, so it cannot take part in a
/// second merge during the same scan: `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
pub fn reduce(line: Line) -> LineReduction {
    let mut cells = line;
    let mut merged = [false; BOARD_SIZE];
    let mut score_delta = 0;

    compact(&mut cells, &mut merged);

    for i in 0..BOARD_SIZE - 1 {
        if cells[i] != 0 && cells[i] == cells[i + 1] {
            cells[i] *= 2;
            cells[i + 1] = 0;
            merged[i] = true;
            score_delta += cells[i];
        }
    }

    compact(&mut cells, &mut merged);

    LineReduction {
        cells,
        score_delta,
        merged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(line: &Line) -> u32 {
        line.iter().sum()
    }

    #[test]
    fn compacts_and_merges_toward_front() {
        let out = reduce([0, 2, 2, 4]);
        assert_eq!(out.cells, [4, 4, 0, 0]);
        assert_eq!(out.score_delta, 4);
        assert_eq!(out.merged_positions().collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn triple_merges_only_leading_pair() {
        let out = reduce([2, 2, 2, 0]);
        assert_eq!(out.cells, [4, 2, 0, 0]);
        assert_eq!(out.score_delta, 4);
    }

    #[test]
    fn four_equal_make_two_pairs() {
        let out = reduce([2, 2, 2, 2]);
        assert_eq!(out.cells, [4, 4, 0, 0]);
        assert_eq!(out.score_delta, 8);
        assert_eq!(out.merged, [true, true, false, false]);
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        let out = reduce([4, 2, 2, 0]);
        assert_eq!(out.cells, [4, 4, 0, 0]);
        assert_eq!(out.merged, [false, true, false, false]);
    }

    #[test]
    fn gaps_do_not_block_merges() {
        let out = reduce([2, 0, 0, 2]);
        assert_eq!(out.cells, [4, 0, 0, 0]);
        assert_eq!(out.score_delta, 4);
    }

    #[test]
    fn untouched_line_has_no_events() {
        let out = reduce([2, 4, 8, 16]);
        assert_eq!(out.cells, [2, 4, 8, 16]);
        assert_eq!(out.score_delta, 0);
        assert_eq!(out.merged_positions().count(), 0);
        assert_eq!(reduce([0; BOARD_SIZE]).cells, [0; BOARD_SIZE]);
    }

    #[test]
    fn merging_conserves_sum() {
        let lines: [Line; 6] = [
            [2, 2, 4, 4],
            [0, 0, 0, 2],
            [8, 0, 8, 8],
            [16, 16, 16, 0],
            [2, 4, 2, 4],
            [1024, 1024, 0, 0],
        ];
        for line in lines {
            let out = reduce(line);
            // 2 + 2 = 4: merging never changes the visible sum
            assert_eq!(sum(&out.cells), sum(&line), "{:?}", line);
            let non_zero_in = line.iter().filter(|&&c| c != 0).count();
            let non_zero_out = out.cells.iter().filter(|&&c| c != 0).count();
            assert!(non_zero_out <= non_zero_in);
            assert_eq!(non_zero_in - non_zero_out, out.merged_positions().count());
            let merged_sum: u32 = out.merged_positions().map(|i| out.cells[i]).sum();
            assert_eq!(out.score_delta, merged_sum);
        }
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(reduce([8, 8, 4, 4]), reduce([8, 8, 4, 4]));
    }
}
