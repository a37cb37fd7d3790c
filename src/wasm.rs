use wasm_bindgen::prelude::*;
use web_time::Instant;

use crate::config::MatchConfig;
use crate::controller::Match;
use crate::error::ConfigError;

/// WASM-friendly wrapper around `Match` for the canvas client.
///
/// The client owns rendering, pointer hit-testing and the WebSocket; it feeds
/// cell clicks, timer ticks and inbound frames in, and draws `snapshot()`.
#[wasm_bindgen]
pub struct WasmMatch {
    inner: Match,
}

#[wasm_bindgen]
impl WasmMatch {
    /// `config` may be `undefined` for defaults, or `{ cpuDelayMs, passBannerMs, seed }`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmMatch, JsError> {
        let config = decode_config(config)?;
        let inner = Match::new(config)?;
        Ok(WasmMatch { inner })
    }

    #[wasm_bindgen(js_name = startLocal)]
    pub fn start_local(&mut self) {
        self.inner.start_local();
    }

    #[wasm_bindgen(js_name = startComputer)]
    pub fn start_computer(&mut self) {
        self.inner.start_computer();
    }

    /// Call once the socket is open; the server's `start` frame begins play.
    #[wasm_bindgen(js_name = startRemote)]
    pub fn start_remote(&mut self) {
        self.inner.start_remote();
    }

    #[wasm_bindgen(js_name = backToMenu)]
    pub fn back_to_menu(&mut self) {
        self.inner.back_to_menu();
    }

    /// Returns a frame to `ws.send()` when a remote move was committed.
    #[wasm_bindgen(js_name = clickCell)]
    pub fn click_cell(&mut self, x: i32, y: i32) -> Option<String> {
        self.inner.click_cell(x, y, Instant::now())
    }

    /// Call once per animation frame.
    pub fn tick(&mut self) {
        self.inner.tick(Instant::now());
    }

    pub fn receive(&mut self, frame: &str) {
        self.inner.receive(frame, Instant::now());
    }

    #[wasm_bindgen(js_name = peerLost)]
    pub fn peer_lost(&mut self) {
        self.inner.peer_lost();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        let state = self.inner.snapshot(Instant::now());
        Ok(serde_wasm_bindgen::to_value(&state)?)
    }

    /// `undefined` until the game is over.
    pub fn result(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.inner.result())?)
    }
}

fn decode_config(value: JsValue) -> Result<MatchConfig, ConfigError> {
    if value.is_undefined() || value.is_null() {
        return Ok(MatchConfig::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|err| ConfigError::Decode(err.to_string()))
}
