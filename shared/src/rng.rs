use std::collections::VecDeque;

use rand::Rng;

use crate::constants::{SPAWN_FOUR_PROBABILITY, SPAWN_FOUR_VALUE, SPAWN_TWO_VALUE};

/// Source of randomness for tile spawns.
///
/// Every `rand::Rng` is a `TileRng`, so callers pass `rand::thread_rng()` in
/// the browser and a seeded generator or [`ScriptedTiles`] in tests.
pub trait TileRng {
    /// Picks a position in `0..empty_count`. `empty_count` is never zero.
    fn pick_cell(&mut self, empty_count: usize) -> usize;

    /// Value of the tile to place: 2 with probability 0.9, otherwise 4.
    fn pick_value(&mut self) -> u32;
}

impl<R: Rng + ?Sized> TileRng for R {
    fn pick_cell(&mut self, empty_count: usize) -> usize {
        self.gen_range(0..empty_count)
    }

    fn pick_value(&mut self) -> u32 {
        if self.gen_bool(SPAWN_FOUR_PROBABILITY) {
            SPAWN_FOUR_VALUE
        } else {
            SPAWN_TWO_VALUE
        }
    }
}

/// Replays a fixed sequence of spawns.
///
/// Cell picks are taken modulo the number of empty cells; once a queue runs
/// dry it keeps answering with the first empty cell and a 2.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTiles {
    cells: VecDeque<usize>,
    values: VecDeque<u32>,
}

impl ScriptedTiles {
    pub fn new(cells: impl IntoIterator<Item = usize>, values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
            values: values.into_iter().collect(),
        }
    }

    /// Always the first empty cell, always a 2.
    pub fn first_empty() -> Self {
        Self::default()
    }
}

impl TileRng for ScriptedTiles {
    fn pick_cell(&mut self, empty_count: usize) -> usize {
        self.cells.pop_front().unwrap_or(0) % empty_count
    }

    fn pick_value(&mut self) -> u32 {
        self.values.pop_front().unwrap_or(SPAWN_TWO_VALUE)
    }
}
