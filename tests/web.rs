// Browser tests; run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn start_creates_canvas() {
    fallacy_quest::start_game_with_config(r#"{"canvas_id": "fq-test", "fit_to_window": false, "seed": 1}"#)
        .expect("game should start");
    let doc = web_sys::window().unwrap().document().unwrap();
    assert!(doc.get_element_by_id("fq-test").is_some());
}

#[wasm_bindgen_test]
fn bad_config_is_rejected() {
    assert!(fallacy_quest::start_game_with_config(r#"{"questions_per_round": 0}"#).is_err());
}

#[wasm_bindgen_test]
fn restart_reinstalls_logging_at_new_level() {
    fallacy_quest::start_game_with_config(r#"{"canvas_id": "fq-log", "fit_to_window": false, "log_level": "warn"}"#)
        .expect("first start");
    assert_eq!(log::max_level(), log::LevelFilter::Warn);
    fallacy_quest::start_game_with_config(r#"{"canvas_id": "fq-log", "fit_to_window": false, "log_level": "debug"}"#)
        .expect("second start");
    assert_eq!(log::max_level(), log::LevelFilter::Debug);
}
