pub const BOARD_SIZE: usize = 4;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

pub const INITIAL_TILES: usize = 2;
pub const SPAWN_TWO_VALUE: u32 = 2;
pub const SPAWN_FOUR_VALUE: u32 = 4;
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

pub const UNDO_SHORT: usize = 1;
pub const UNDO_LONG: usize = 3;

pub const DEFAULT_MOVE_COOLDOWN_MS: f64 = 120.0;
pub const DEFAULT_SWIPE_MIN_DISTANCE: f64 = 30.0;

pub const BOARD_FULL_ERROR: &str = "No empty cell left for a new tile";
pub const EMPTY_BOARD_ERROR: &str = "There is no tile to remove";
pub const GAME_OVER_ERROR: &str = "The game is over, use a recovery action or start again";
