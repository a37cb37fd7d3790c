#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use othello::wasm::WasmMatch;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn field(value: &JsValue, key: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(key)).unwrap()
}

#[wasm_bindgen_test]
fn ready_probe() {
    assert!(othello::wasm_ready());
}

#[wasm_bindgen_test]
fn snapshot_exposes_opening_position() {
    let mut m = WasmMatch::new(JsValue::UNDEFINED).map_err(JsValue::from).unwrap();
    m.start_local();

    let state = m.snapshot().map_err(JsValue::from).unwrap();

    assert_eq!(field(&state, "screen").as_string().as_deref(), Some("play"));
    assert_eq!(field(&state, "blackCount").as_f64(), Some(2.0));
    assert_eq!(field(&state, "whiteCount").as_f64(), Some(2.0));
    assert_eq!(field(&state, "currentPlayer").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn config_object_is_decoded() {
    let config = Object::new();
    Reflect::set(&config, &"cpuDelayMs".into(), &JsValue::from_f64(0.0)).unwrap();
    Reflect::set(&config, &"seed".into(), &JsValue::from_f64(3.0)).unwrap();

    let mut m = WasmMatch::new(config.into()).map_err(JsValue::from).unwrap();
    m.start_computer();
    assert_eq!(m.click_cell(2, 3), None);
    m.tick();

    let state = m.snapshot().map_err(JsValue::from).unwrap();
    assert_eq!(field(&state, "currentPlayer").as_f64(), Some(1.0));
    assert_eq!(field(&state, "isThinking").as_bool(), Some(false));
}

#[wasm_bindgen_test]
fn remote_click_returns_move_frame() {
    let mut m = WasmMatch::new(JsValue::NULL).map_err(JsValue::from).unwrap();
    m.start_remote();
    m.receive(r#"{"type":"start","color":1}"#);

    let frame = m.click_cell(2, 3);

    assert_eq!(frame.as_deref(), Some(r#"{"type":"move","x":2,"y":3}"#));
}
