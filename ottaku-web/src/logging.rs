//! Browser console logging through `wasm-logger`.

use log::LevelFilter;

/// Logger settings for a configured level; `None` when logging is off.
#[must_use]
pub fn logger_config(level: LevelFilter) -> Option<wasm_logger::Config> {
    level.to_level().map(wasm_logger::Config::new)
}

/// Install the console logger at the configured level.
pub fn init(level: LevelFilter) {
    match logger_config(level) {
        Some(config) => wasm_logger::init(config),
        None => log::set_max_level(LevelFilter::Off),
    }
}
