use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::window;

/// `window.Telegram.WebApp`, present only inside the Telegram client.
pub fn web_app() -> Option<JsValue> {
    let window = window()?;
    let telegram = Reflect::get(&window, &JsValue::from_str("Telegram")).ok()?;
    if telegram.is_undefined() || telegram.is_null() {
        return None;
    }
    let web_app = Reflect::get(&telegram, &JsValue::from_str("WebApp")).ok()?;
    (!web_app.is_undefined() && !web_app.is_null()).then_some(web_app)
}

fn call(web_app: &JsValue, method: &str) -> bool {
    Reflect::get(web_app, &JsValue::from_str(method))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .map(|f| f.call0(web_app).is_ok())
        .unwrap_or(false)
}

/// Tells the host the mini-app is ready and asks for the full-height view.
/// Returns false when not running inside Telegram.
pub fn notify_ready() -> bool {
    let Some(web_app) = web_app() else {
        return false;
    };
    let ready = call(&web_app, "ready");
    if !call(&web_app, "expand") {
        log::debug!("Telegram WebApp.expand unavailable");
    }
    log::info!("Telegram WebApp ready signal sent: {}", ready);
    ready
}
