use std::rc::Rc;

use shared::constants::{UNDO_LONG, UNDO_SHORT};
use shared::shared_2048_game::{Direction, Game2048};
use shared::TileRng;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    NewGame,
    Move(Direction),
    RemoveTile,
    Undo(usize),
    ClearHighlights,
}

impl GameAction {
    pub const UNDO_SHORT: GameAction = GameAction::Undo(UNDO_SHORT);
    pub const UNDO_LONG: GameAction = GameAction::Undo(UNDO_LONG);
}

/// Everything the page renders. Only the reducer writes to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameStore {
    pub game: Game2048,
    pub merged: Vec<usize>,
    pub fresh: Vec<usize>,
    pub last_gain: u32,
    pub notice: Option<String>,
}

impl GameStore {
    pub fn apply<R: TileRng + ?Sized>(&mut self, action: GameAction, rng: &mut R) {
        self.notice = None;
        match action {
            GameAction::NewGame => {
                self.fresh = self.game.reset(rng);
                self.merged.clear();
                self.last_gain = 0;
            }
            GameAction::Move(direction) => match self.game.apply_move(direction, rng) {
                Ok(outcome) => {
                    self.merged = outcome.merged;
                    self.fresh = outcome.spawned.into_iter().collect();
                    self.last_gain = outcome.score_delta;
                }
                Err(err) => log::debug!("Ignoring move {:?}: {}", direction, err),
            },
            GameAction::RemoveTile => {
                self.clear_highlights();
                if let Err(err) = self.game.remove_tile() {
                    log::warn!("Remove tile rejected: {}", err);
                    self.notice = Some(err.user_message());
                }
            }
            GameAction::Undo(count) => {
                self.clear_highlights();
                if let Err(err) = self.game.undo(count) {
                    log::warn!("Undo {} rejected: {}", count, err);
                    self.notice = Some(err.user_message());
                }
            }
            GameAction::ClearHighlights => self.clear_highlights(),
        }
    }

    fn clear_highlights(&mut self) {
        self.merged.clear();
        self.fresh.clear();
        self.last_gain = 0;
    }
}

impl Reducible for GameStore {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action, &mut rand::thread_rng());
        Rc::new(next)
    }
}

#[hook]
pub fn use_game() -> UseReducerHandle<GameStore> {
    use_reducer(|| {
        let mut store = GameStore::default();
        store.apply(GameAction::NewGame, &mut rand::thread_rng());
        store
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Board, GameError, ScriptedTiles};

    fn store(rows: [[u32; 4]; 4]) -> GameStore {
        GameStore {
            game: Game2048::from_board(Board::from_rows(rows).unwrap(), 0),
            ..GameStore::default()
        }
    }

    #[test]
    fn new_game_highlights_opening_tiles() {
        let mut s = GameStore::default();
        s.apply(GameAction::NewGame, &mut ScriptedTiles::new([3, 0], [2, 4]));
        assert_eq!(s.fresh, vec![3, 0]);
        assert_eq!(s.game.board().cells()[0], 4);
        assert_eq!(s.game.history_len(), 1);
    }

    #[test]
    fn move_records_events() {
        let mut s = store([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        s.apply(GameAction::Move(Direction::Left), &mut ScriptedTiles::first_empty());
        assert_eq!(s.merged, vec![0]);
        assert_eq!(s.fresh, vec![1]);
        assert_eq!(s.last_gain, 4);
        s.apply(GameAction::ClearHighlights, &mut ScriptedTiles::first_empty());
        assert!(s.merged.is_empty() && s.fresh.is_empty());
    }

    #[test]
    fn failed_undo_sets_notice() {
        let mut s = store([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let board = *s.game.board();
        s.apply(GameAction::UNDO_LONG, &mut ScriptedTiles::first_empty());
        assert_eq!(*s.game.board(), board);
        let expected = GameError::InsufficientHistory { requested: 3, available: 1 }.user_message();
        assert_eq!(s.notice.as_deref(), Some(expected.as_str()));
    }

    #[test]
    fn moves_after_game_over_are_ignored() {
        let mut s = store([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let before = s.game.clone();
        s.apply(GameAction::Move(Direction::Up), &mut ScriptedTiles::first_empty());
        assert_eq!(s.game, before);
        s.apply(GameAction::RemoveTile, &mut ScriptedTiles::first_empty());
        assert!(!s.game.is_over());
        assert!(s.notice.is_none());
    }
}
