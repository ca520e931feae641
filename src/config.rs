//! Runtime Configuration
//!
//! Defaults can be overridden by defining `window.ESCALA360_CONFIG` before
//! the bundle loads, e.g. `{ "api_base": "https://api.example" }`.

use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "ESCALA360_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every API path; empty means same origin
    pub api_base: String,
    pub toast_duration_ms: u32,
    pub toast_fade_ms: u32,
    pub transition_delay_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            toast_duration_ms: 2500,
            toast_fade_ms: 300,
            transition_delay_ms: 250,
        }
    }
}

impl AppConfig {
    /// Reads the page-level override once; falls back to defaults.
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let raw = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
            Ok(raw) if !raw.is_undefined() && !raw.is_null() => raw,
            _ => return Self::default(),
        };
        match serde_wasm_bindgen::from_value::<AppConfig>(raw) {
            Ok(config) => {
                log::info!("[CONFIG] using {} override: {:?}", CONFIG_GLOBAL, config);
                config
            }
            Err(err) => {
                log::warn!("[CONFIG] ignoring malformed {}: {}", CONFIG_GLOBAL, err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_base": "https://api.escala360.example", "toast_duration_ms": 2000}"#)
                .unwrap();
        assert_eq!(config.api_base, "https://api.escala360.example");
        assert_eq!(config.toast_duration_ms, 2000);
        assert_eq!(config.toast_fade_ms, 300);
        assert_eq!(config.transition_delay_ms, 250);
    }
}
