use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::constants::{CELL_COUNT, INITIAL_TILES};
use crate::error::GameError;
use crate::rng::TileRng;

pub use crate::board::{Board, Direction, Shift};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    Over,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Game2048 {
    board: Board,
    score: u32,
    // Snapshots taken before each move attempt, oldest first.
    history: Vec<Board>,
    phase: GamePhase,
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PublicGame2048 {
    pub board: Vec<Vec<u32>>,
    pub score: u32,
    pub game_over: bool,
    pub max_tile: u32,
    pub undo_available: usize,
}

/// Events produced by one move, used to drive animations.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    pub direction: Option<Direction>,
    pub changed: bool,
    pub score_delta: u32,
    pub moved: Vec<usize>,
    pub merged: Vec<usize>,
    pub spawned: Option<usize>,
    pub phase: GamePhase,
}

impl Game2048 {
    /// An empty board in the Playing phase. Call [`Game2048::reset`] to deal
    /// the opening tiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// New game with the opening tiles already placed.
    pub fn start<R: TileRng + ?Sized>(rng: &mut R) -> Self {
        let mut game = Self::new();
        game.reset(rng);
        game
    }

    /// Seeds a position directly, e.g. to resume a board handed over by the host.
    /// History starts with this board as its only entry.
    pub fn from_board(board: Board, score: u32) -> Self {
        let mut game = Self {
            board,
            score,
            history: vec![board],
            phase: GamePhase::Playing,
        };
        game.refresh_phase();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn max_tile(&self) -> u32 {
        self.board.max_tile()
    }

    pub fn to_public(&self) -> PublicGame2048 {
        PublicGame2048 {
            board: self.board.rows(),
            score: self.score,
            game_over: self.is_over(),
            max_tile: self.board.max_tile(),
            undo_available: self.history.len(),
        }
    }

    /// Clears board, score and history, deals the opening tiles and records
    /// the resulting board as the first history entry.
    pub fn reset<R: TileRng + ?Sized>(&mut self, rng: &mut R) -> Vec<usize> {
        self.board = Board::EMPTY;
        self.score = 0;
        self.history.clear();
        self.phase = GamePhase::Playing;

        let mut spawned = Vec::with_capacity(INITIAL_TILES);
        for _ in 0..INITIAL_TILES {
            if let Ok(index) = self.spawn_random_tile(rng) {
                spawned.push(index);
            }
        }
        self.history.push(self.board);
        info!("New game dealt tiles at {:?}", spawned);
        spawned
    }

    /// Places a 2 (90%) or 4 (10%) on a uniformly chosen empty cell and
    /// returns its index.
    pub fn spawn_random_tile<R: TileRng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, GameError> {
        let empties = self.board.empty_cells();
        if empties.is_empty() {
            return Err(GameError::BoardFull);
        }
        let index = empties[rng.pick_cell(empties.len())];
        self.board.set_index(index, rng.pick_value());
        Ok(index)
    }

    /// Slides the board. A snapshot is pushed even when nothing moves, so a
    /// blocked move still costs one undo step.
    pub fn apply_move<R: TileRng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
    ) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        self.history.push(self.board);
        let Shift {
            board,
            score_delta,
            changed,
            merged,
            moved,
        } = self.board.shift(direction);

        let mut outcome = MoveOutcome {
            direction: Some(direction),
            changed,
            score_delta,
            moved,
            merged,
            spawned: None,
            phase: self.phase,
        };

        if changed {
            self.board = board;
            self.score += score_delta;
            outcome.spawned = self.spawn_random_tile(rng).ok();
            self.refresh_phase();
            outcome.phase = self.phase;
            debug!(
                "Move {:?}: +{} points, {} merges, score {}",
                direction,
                score_delta,
                outcome.merged.len(),
                self.score
            );
            if self.is_over() {
                info!("Game over with score {} and best tile {}", self.score, self.max_tile());
            }
        } else {
            debug!("Move {:?} left the board unchanged", direction);
        }

        Ok(outcome)
    }

    /// True when the board is full and no two neighbours are equal.
    pub fn is_terminal(&self) -> bool {
        !self.board.has_moves()
    }

    fn refresh_phase(&mut self) {
        self.phase = if self.is_terminal() {
            GamePhase::Over
        } else {
            GamePhase::Playing
        };
    }

    /// Clears the highest tile. Ties go to the bottom-most, then right-most
    /// cell. History is kept.
    pub fn remove_tile(&mut self) -> Result<usize, GameError> {
        let max = self.board.max_tile();
        if max == 0 {
            return Err(GameError::EmptyBoard);
        }
        let index = (0..CELL_COUNT)
            .rev()
            .find(|&i| self.board.cells()[i] == max)
            .ok_or(GameError::EmptyBoard)?;
        self.board.set_index(index, 0);
        self.phase = GamePhase::Playing;
        info!("Removed {} tile at cell {}", max, index);
        Ok(index)
    }

    /// Rewinds `count` moves. The intermediate snapshots are dropped, the
    /// score is kept.
    pub fn undo(&mut self, count: usize) -> Result<(), GameError> {
        let available = self.history.len();
        if available < count {
            return Err(GameError::InsufficientHistory {
                requested: count,
                available,
            });
        }
        if count == 0 {
            return Ok(());
        }
        let restored = self.history.drain(available - count..).next();
        if let Some(board) = restored {
            self.board = board;
        }
        self.phase = GamePhase::Playing;
        info!("Undid {} moves, {} snapshots left", count, self.history.len());
        Ok(())
    }
}
