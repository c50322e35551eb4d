//! Game core for the 2048 mini-game: line reduction, board transforms, the
//! game state with its undo history, and the recovery actions offered after a
//! game is lost. Nothing here touches the DOM.

pub mod board;
pub mod constants;
pub mod error;
pub mod rng;
pub mod row_reducer;
pub mod shared_2048_game;
pub mod validation;

pub use error::GameError;
pub use rng::{ScriptedTiles, TileRng};
pub use shared_2048_game::{Board, Direction, Game2048, GamePhase, MoveOutcome, PublicGame2048};
