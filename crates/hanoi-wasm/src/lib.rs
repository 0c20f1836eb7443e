//! WebAssembly binding for the Tower of Hanoi engine
//!
//! The page owns rendering and audio. It forwards peg clicks and key presses
//! here, plays the returned cue and re-renders from the state snapshot.

use hanoi_core::{format_time, Command, Engine, EngineConfig, SimpleRng};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::KeyboardEvent;

mod clock;


pub use clock::BrowserClock;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Convert to a JS value, with `None` becoming `null`
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value.serialize(&serializer).map_err(JsValue::from)
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

/// The browser-facing game controller
#[wasm_bindgen]
pub struct HanoiGame {
    engine: Engine<SimpleRng, BrowserClock>,
}

impl Default for HanoiGame {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl HanoiGame {
    /// Create an idle game with the default disc count
    #[wasm_bindgen(constructor)]
    pub fn new() -> HanoiGame {
        HanoiGame {
            engine: Engine::new(SimpleRng::new(), BrowserClock),
        }
    }

    /// Create an idle game from a JSON config such as `{"disc_count": 5}`
    #[wasm_bindgen]
    pub fn with_config(json: &str) -> Result<HanoiGame, JsValue> {
        let config: EngineConfig =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(HanoiGame {
            engine: Engine::with_config(config, SimpleRng::new(), BrowserClock),
        })
    }

    /// Handle keyboard input, returning the feedback cue name
    #[wasm_bindgen]
    pub fn handle_key(&mut self, event: &KeyboardEvent) -> String {
        self.press(&event.key())
    }

    /// Handle a key by name, returning the feedback cue name
    #[wasm_bindgen]
    pub fn press(&mut self, key: &str) -> String {
        self.engine.handle_key(key).name().to_string()
    }

    /// Handle a click on a peg, returning the feedback cue name
    #[wasm_bindgen]
    pub fn click_peg(&mut self, index: usize) -> String {
        self.engine.apply(Command::SelectPeg(index)).name().to_string()
    }

    #[wasm_bindgen]
    pub fn start_game(&mut self) {
        self.engine.start_game();
    }

    #[wasm_bindgen]
    pub fn reset_game(&mut self) {
        self.engine.reset_game();
    }

    #[wasm_bindgen]
    pub fn select_peg(&mut self, index: usize) -> bool {
        self.engine.select_peg(index).is_ok()
    }

    #[wasm_bindgen]
    pub fn make_move(&mut self, from: usize, to: usize) -> bool {
        self.engine.make_move(from, to).is_ok()
    }

    #[wasm_bindgen]
    pub fn clear_selection(&mut self) {
        self.engine.clear_selection();
    }

    /// Only takes effect while no game is running
    #[wasm_bindgen]
    pub fn set_disc_count(&mut self, count: u8) -> bool {
        self.engine.set_disc_count(count).is_ok()
    }

    #[wasm_bindgen]
    pub fn set_target_peg(&mut self, index: usize) -> bool {
        self.engine.set_target_peg(index).is_ok()
    }

    #[wasm_bindgen]
    pub fn undo_move(&mut self) -> bool {
        self.engine.undo_move().is_ok()
    }

    /// Suggested move as `{from, to}`, or `null`
    #[wasm_bindgen]
    pub fn hint(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.get_hint())
    }

    #[wasm_bindgen]
    pub fn is_valid_move(&self, from: usize, to: usize) -> bool {
        self.engine.is_valid_move(from, to)
    }

    /// Get current game state as a JS object
    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.snapshot())
    }

    /// Get current game state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        serde_json::to_string(&self.engine.snapshot()).unwrap_or_else(|e| {
            warn(&format!("failed to serialize game state: {}", e));
            String::new()
        })
    }

    #[wasm_bindgen]
    pub fn min_moves(&self) -> u32 {
        self.engine.min_moves()
    }

    #[wasm_bindgen]
    pub fn efficiency(&self) -> u32 {
        self.engine.efficiency()
    }

    /// Get elapsed time in seconds
    #[wasm_bindgen]
    pub fn game_time(&self) -> u32 {
        self.engine.game_time() as u32
    }

    /// Get formatted elapsed time
    #[wasm_bindgen]
    pub fn elapsed_string(&self) -> String {
        format_time(self.engine.game_time())
    }

    #[wasm_bindgen]
    pub fn move_count(&self) -> u32 {
        self.engine.move_count()
    }

    #[wasm_bindgen]
    pub fn disc_count(&self) -> u8 {
        self.engine.disc_count()
    }

    #[wasm_bindgen]
    pub fn target_peg(&self) -> usize {
        self.engine.target_peg()
    }

    #[wasm_bindgen]
    pub fn is_started(&self) -> bool {
        self.engine.is_started()
    }

    /// Check if game is complete
    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.engine.is_completed()
    }
}
