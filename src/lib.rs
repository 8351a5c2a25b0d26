//! Fallacy Quest core crate.
//!
//! A short passage containing a logical fallacy is shown on a canvas; the player
//! names the fallacy from four choices and clicks the phrases that make it up.
//! Answers score a time-decaying reward boosted by a combo of consecutive
//! correct answers.
//!
//! Everything except `app` and `render` is plain Rust and runs under a native
//! `cargo test`.

use wasm_bindgen::prelude::*;

mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod layout;
mod logging;
pub mod quiz;
mod render;
pub mod widgets;

pub use config::GameConfig;
pub use error::{GameError, QuizError};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Start with the default configuration.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    start_game_with_config("")
}

/// Start with a JSON [`GameConfig`]; missing fields take their defaults.
#[wasm_bindgen]
pub fn start_game_with_config(config_json: &str) -> Result<(), JsValue> {
    let cfg = GameConfig::from_json(config_json)?;
    logging::init(cfg.level_filter()?);
    app::start(cfg)?;
    Ok(())
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
