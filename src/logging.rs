//! Browser console logging through `wasm_logger`.

use std::sync::Once;

use log::{Level, LevelFilter};

static INIT: Once = Once::new();

/// Install the console logger. Safe to call more than once; later calls only
/// adjust the level.
pub fn init(level: LevelFilter) {
    // The backend passes everything; the facade's max level does the filtering.
    INIT.call_once(|| wasm_logger::init(wasm_logger::Config::new(Level::Trace)));
    log::set_max_level(level);
}
