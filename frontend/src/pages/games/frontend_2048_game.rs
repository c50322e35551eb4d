use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_timers::callback::Timeout;
use shared::constants::{UNDO_LONG, UNDO_SHORT};
use shared::shared_2048_game::{Direction, PublicGame2048};
use wasm_bindgen::JsCast;
use web_sys::{window, Document, KeyboardEvent, TouchEvent};
use yew::prelude::*;

use crate::config::FrontendConfig;
use crate::hooks::use_game::{use_game, GameAction, GameStore};
use crate::input::{direction_for_key, direction_for_swipe, MoveThrottle};
use crate::styles;

const HIGHLIGHT_MS: u32 = 180;

#[derive(Properties, PartialEq)]
pub struct Game2048Props {
    pub config: FrontendConfig,
}

fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

fn is_game_board_element(target: Option<web_sys::EventTarget>) -> bool {
    target
        .as_ref()
        .and_then(|t| t.dyn_ref::<web_sys::Element>())
        .and_then(|element| element.closest(".game-board").ok().flatten())
        .is_some()
}

/// Keyboard and swipe listeners. Both funnel into the same throttled
/// dispatch; the reducer ignores moves once the game is over.
fn attach_listeners(
    document: &Document,
    dispatcher: UseReducerDispatcher<GameStore>,
    config: &FrontendConfig,
) -> Vec<EventListener> {
    let options = EventListenerOptions {
        passive: false,
        phase: EventListenerPhase::Bubble,
    };
    let throttle = RefCell::new(MoveThrottle::new(config.move_cooldown_ms));
    let send: Rc<dyn Fn(Direction)> = Rc::new(move |direction| {
        if throttle.borrow_mut().try_accept(now_ms()) {
            dispatcher.dispatch(GameAction::Move(direction));
        } else {
            log::debug!("Throttled move {:?}", direction);
        }
    });

    let keydown = {
        let send = send.clone();
        EventListener::new_with_options(document, "keydown", options.clone(), move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.repeat() {
                return;
            }
            if let Some(direction) = direction_for_key(&event.key()) {
                event.prevent_default();
                event.stop_propagation();
                send(direction);
            }
        })
    };

    let touch_start = Rc::new(Cell::new((0.0, 0.0)));

    let touchstart = {
        let touch_start = touch_start.clone();
        EventListener::new_with_options(document, "touchstart", options.clone(), move |event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            if is_game_board_element(event.target()) {
                event.prevent_default();
            }
            if let Some(touch) = event.touches().get(0) {
                touch_start.set((f64::from(touch.client_x()), f64::from(touch.client_y())));
            }
        })
    };

    let touchend = {
        let min_distance = config.swipe_min_distance;
        EventListener::new_with_options(document, "touchend", options.clone(), move |event| {
            let Some(event) = event.dyn_ref::<TouchEvent>() else {
                return;
            };
            if is_game_board_element(event.target()) {
                event.prevent_default();
            }
            if let Some(touch) = event.changed_touches().get(0) {
                let (start_x, start_y) = touch_start.get();
                let delta_x = f64::from(touch.client_x()) - start_x;
                let delta_y = f64::from(touch.client_y()) - start_y;
                if let Some(direction) = direction_for_swipe(delta_x, delta_y, min_distance) {
                    send(direction);
                }
            }
        })
    };

    let touchmove = EventListener::new_with_options(document, "touchmove", options, move |event| {
        if let Some(event) = event.dyn_ref::<TouchEvent>() {
            if is_game_board_element(event.target()) {
                event.prevent_default();
            }
        }
    });

    vec![keydown, touchstart, touchend, touchmove]
}

fn render_board(game: &PublicGame2048, store: &GameStore) -> Html {
    let cells = game.board.iter().flatten().enumerate().map(|(index, &value)| {
        let display = if value == 0 { String::new() } else { value.to_string() };
        let highlight = if store.merged.contains(&index) {
            Some(styles::TILE_MERGED)
        } else if store.fresh.contains(&index) {
            Some(styles::TILE_NEW)
        } else {
            None
        };
        html! {
            <div class={classes!(styles::TILE_BASE, styles::tile_color(value), highlight)}>
                { display }
            </div>
        }
    });
    html! {
        <div class={styles::BOARD_GRID}>
            { for cells }
        </div>
    }
}

#[function_component(Frontend2048Game)]
pub fn frontend_2048_game(props: &Game2048Props) -> Html {
    let store = use_game();

    {
        let dispatcher = store.dispatcher();
        use_effect_with(props.config.clone(), move |config| {
            let listeners = window()
                .and_then(|w| w.document())
                .map(|document| attach_listeners(&document, dispatcher, config))
                .unwrap_or_default();
            move || drop(listeners)
        });
    }

    {
        let dispatcher = store.dispatcher();
        let has_highlights = !store.merged.is_empty() || !store.fresh.is_empty();
        use_effect_with((store.merged.clone(), store.fresh.clone()), move |_| {
            let timeout = has_highlights
                .then(|| Timeout::new(HIGHLIGHT_MS, move || dispatcher.dispatch(GameAction::ClearHighlights)));
            move || drop(timeout)
        });
    }

    let dispatch = |action: GameAction| {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(action))
    };

    let game = store.game.to_public();
    let title = if props.config.embedded_in_telegram { "2048" } else { "2048 Game" };

    html! {
        <div class="flex flex-col items-center w-full">
            <div class={styles::CARD}>
                <h1 class={styles::TEXT_H1}>{ title }</h1>
                <p class={styles::TEXT_BODY}>
                    { "Use arrow keys, WASD, IJKL, or numpad 8426. On mobile, swipe up/down/left/right to move." }
                </p>
                <div class="space-y-4">
                    { render_board(&game, &store) }
                    <p class={classes!(styles::TEXT_SCORE, "mt-4")}>
                        { format!("Score: {}", game.score) }
                        { if store.last_gain > 0 {
                            html! { <span class="ml-2 text-green-600 dark:text-green-400">{ format!("+{}", store.last_gain) }</span> }
                        } else {
                            html! {}
                        } }
                    </p>
                    <p class={styles::TEXT_SCORE}>{ format!("Best tile: {}", game.max_tile) }</p>
                    { if let Some(notice) = &store.notice {
                        html! { <p class={styles::TEXT_NOTICE}>{ notice.clone() }</p> }
                    } else {
                        html! {}
                    } }
                    { if game.game_over {
                        html! {
                            <div class={styles::GAME_OVER_PANEL}>
                                <p class="text-red-500 font-bold mb-3">{ "Game Over!" }</p>
                                <div class="flex flex-wrap justify-center gap-2">
                                    <button class={styles::BUTTON_SECONDARY} onclick={dispatch(GameAction::RemoveTile)}>
                                        { "Remove highest tile" }
                                    </button>
                                    <button
                                        class={styles::BUTTON_SECONDARY}
                                        disabled={game.undo_available < UNDO_SHORT}
                                        onclick={dispatch(GameAction::UNDO_SHORT)}
                                    >
                                        { format!("Undo {}", UNDO_SHORT) }
                                    </button>
                                    <button
                                        class={styles::BUTTON_SECONDARY}
                                        disabled={game.undo_available < UNDO_LONG}
                                        onclick={dispatch(GameAction::UNDO_LONG)}
                                    >
                                        { format!("Undo {}", UNDO_LONG) }
                                    </button>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    } }
                    <div class="flex justify-center mt-4">
                        <button class={styles::BUTTON_PRIMARY} onclick={dispatch(GameAction::NewGame)}>
                            { if game.game_over { "Play Again" } else { "New Game" } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
