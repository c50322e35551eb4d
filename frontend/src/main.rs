use frontend::{telegram, App};
use yew::Renderer;

fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::default());

    if !telegram::notify_ready() {
        log::info!("Running outside Telegram");
    }

    Renderer::<App>::new().render();
}
