pub mod config;
pub mod hooks;
pub mod input;
pub mod pages;
pub mod styles;
pub mod telegram;

use yew::prelude::*;

use crate::config::FrontendConfig;
use crate::pages::games::Frontend2048Game;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| FrontendConfig::detect());

    html! {
        <div class="min-h-screen w-full bg-gray-50 dark:bg-gray-900 py-6">
            <div class="mx-auto flex justify-center">
                <Frontend2048Game config={(*config).clone()} />
            </div>
        </div>
    }
}
