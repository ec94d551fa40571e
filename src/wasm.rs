// WebAssembly bindings for a browser or webview front end
use crate::calc::{self, ProgressRequest};
use crate::input;
use crate::locale::Locale;
use crate::shell::{AppState, TitleAnimation};
use crate::units::Unit;
use std::time::Duration;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct TickCalcWasm {
    animation: TitleAnimation,
    started_ms: f64,
}

impl Default for TickCalcWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl TickCalcWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            animation: TitleAnimation::default(),
            started_ms: js_sys::Date::now(),
        }
    }

    /// Compute the time to goal from raw entry texts and unit suffixes
    /// Returns JSON: {"status": "remaining"|"already_reached"|"error", ...}
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn compute(
        &self,
        want: &str,
        want_unit: &str,
        have: &str,
        have_unit: &str,
        per_tick: &str,
        per_tick_unit: &str,
        double_rate: bool,
    ) -> Result<String, JsValue> {
        let request = ProgressRequest::from_texts(
            (want, want_unit),
            (have, have_unit),
            (per_tick, per_tick_unit),
            double_rate,
        );
        let result = calc::result_to_json(&request.evaluate());

        serde_json::to_string(&result)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    /// Result text in the given language ("en" or "es")
    #[wasm_bindgen]
    #[allow(clippy::too_many_arguments)]
    pub fn compute_text(
        &self,
        locale: &str,
        want: &str,
        want_unit: &str,
        have: &str,
        have_unit: &str,
        per_tick: &str,
        per_tick_unit: &str,
        double_rate: bool,
    ) -> Result<String, JsValue> {
        let locale: Locale = locale.parse().map_err(|e: String| JsValue::from_str(&e))?;
        let request = ProgressRequest::from_texts(
            (want, want_unit),
            (have, have_unit),
            (per_tick, per_tick_unit),
            double_rate,
        );
        Ok(calc::render_result(&request.evaluate(), locale.labels()))
    }

    /// Keystroke filter for numeric inputs
    #[wasm_bindgen]
    pub fn validate(&self, candidate: &str) -> bool {
        input::is_valid_numeric_entry(candidate)
    }

    /// Unit suffixes in dropdown order
    /// Returns JSON string array
    #[wasm_bindgen]
    pub fn units(&self) -> Result<String, JsValue> {
        let units: Vec<Unit> = Unit::all().collect();
        serde_json::to_string(&units)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize units: {}", e)))
    }

    /// All label text for a language
    /// Returns JSON object keyed by label name, plus the language button caption
    #[wasm_bindgen]
    pub fn labels(&self, locale: &str) -> Result<String, JsValue> {
        let locale: Locale = locale.parse().map_err(|e: String| JsValue::from_str(&e))?;
        let mut value = serde_json::json!(locale.labels());
        if let serde_json::Value::Object(ref mut map) = value {
            map.insert(
                "toggle_caption".to_string(),
                serde_json::json!(locale.toggle_caption()),
            );
        }

        serde_json::to_string(&value)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize labels: {}", e)))
    }

    /// Full form snapshot for a fresh state in the given language
    #[wasm_bindgen]
    pub fn initial_view(&self, locale: &str) -> Result<String, JsValue> {
        let locale: Locale = locale.parse().map_err(|e: String| JsValue::from_str(&e))?;
        let mut state = AppState::default();
        state.locale = locale;

        serde_json::to_string(&crate::shell::render(&state))
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize view: {}", e)))
    }

    /// Title colour for a point in time, as "#rrggbb"
    /// The front end calls this from its own 16 ms interval
    #[wasm_bindgen]
    pub fn title_color(&self, elapsed_ms: f64) -> String {
        let elapsed = Duration::try_from_secs_f64(elapsed_ms / 1000.0).unwrap_or_default();
        self.animation.color_at(elapsed).to_string()
    }

    /// Title colour for the current wall-clock time
    #[wasm_bindgen]
    pub fn title_color_now(&self) -> String {
        self.title_color(js_sys::Date::now() - self.started_ms)
    }
}
