use shared::constants::{DEFAULT_MOVE_COOLDOWN_MS, DEFAULT_SWIPE_MIN_DISTANCE};
use web_sys::{window, UrlSearchParams};

use crate::telegram;

#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    pub move_cooldown_ms: f64,
    pub swipe_min_distance: f64,
    pub embedded_in_telegram: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            move_cooldown_ms: DEFAULT_MOVE_COOLDOWN_MS,
            swipe_min_distance: DEFAULT_SWIPE_MIN_DISTANCE,
            embedded_in_telegram: false,
        }
    }
}

impl FrontendConfig {
    /// Defaults, overridden by `?cooldown=` and `?swipe=` in the page URL.
    pub fn detect() -> Self {
        let mut config = Self {
            embedded_in_telegram: telegram::web_app().is_some(),
            ..Self::default()
        };

        let params = window()
            .and_then(|w| w.location().search().ok())
            .and_then(|search| UrlSearchParams::new_with_str(&search).ok());
        if let Some(params) = params {
            for key in ["cooldown", "swipe"] {
                if let Some(value) = params.get(key) {
                    config.apply_override(key, &value);
                }
            }
        }
        log::info!("Frontend config: {:?}", config);
        config
    }

    /// Applies one override. Unknown keys and values that are not finite,
    /// non-negative numbers are ignored.
    pub fn apply_override(&mut self, key: &str, value: &str) -> bool {
        let parsed = match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => v,
            _ => {
                log::warn!("Ignoring config value {}={}", key, value);
                return false;
            }
        };
        match key {
            "cooldown" => self.move_cooldown_ms = parsed,
            "swipe" => self.swipe_min_distance = parsed,
            _ => return false,
        }
        true
    }
}
