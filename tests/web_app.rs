// tests/web_app.rs
//! ブラウザ (wasm32) の上でだけ動かすテスト。`wasm-pack test --headless --firefox` で実行するよ。
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use wasm_klondike::KlondikeApp;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn state_json_is_a_string() {
    let app = KlondikeApp::new(Some(42));
    let state = app.state_json().expect("state json");
    let json = state.as_string().expect("string value");
    assert!(json.contains("\"stock_count\":24"));
}

#[wasm_bindgen_test]
fn bad_config_is_an_error() {
    assert!(KlondikeApp::from_config_json("{ \"draw_count\": 0 }").is_err());
    assert!(KlondikeApp::from_config_json("{ \"seed\": 1 }").is_ok());
}

#[wasm_bindgen_test]
fn unseeded_game_uses_browser_entropy() {
    let mut app = KlondikeApp::new(None);
    app.draw_from_stock();
    assert_eq!(app.game().board().discard().len(), 3);
}
