mod frontend_2048_game;

pub use frontend_2048_game::{Frontend2048Game, Game2048Props};
