//! wasm-bindgen surface for a JavaScript renderer
//!
//! JavaScript maps keys to action names, calls `dispatch` once per input and
//! once per animation frame with `"tick"`, and draws the returned JSON.

use wasm_bindgen::prelude::*;

use crate::sim::{Dispatcher, GameState};
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        return;
    }
    log::info!("Breakout starting...");
}

/// A game owned by the page
#[wasm_bindgen]
pub struct WebGame {
    dispatcher: Dispatcher,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game, optionally from a tuning JSON string
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: Option<String>) -> WebGame {
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).unwrap_or_else(|e| {
                log::warn!("{e}; using default tuning");
                Tuning::default()
            }),
            None => Tuning::default(),
        };
        WebGame {
            dispatcher: Dispatcher::new(tuning),
        }
    }

    /// Apply a named action and return the new snapshot as JSON
    pub fn dispatch(&mut self, action: &str) -> String {
        snapshot_json(self.dispatcher.dispatch_named(action))
    }

    /// Latest snapshot as JSON
    #[wasm_bindgen(js_name = currentState)]
    pub fn current_state(&self) -> String {
        snapshot_json(self.dispatcher.current_state())
    }

    /// Arena tuning as JSON, for sizing the canvas and walls
    pub fn tuning(&self) -> String {
        serde_json::to_string(self.dispatcher.tuning()).unwrap_or_default()
    }
}

fn snapshot_json(state: &GameState) -> String {
    serde_json::to_string(state).unwrap_or_else(|e| {
        log::error!("Failed to serialize snapshot: {e}");
        String::new()
    })
}
