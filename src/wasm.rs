//! WASM bindings for the galaxy-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.

use log::LevelFilter;
use wasm_bindgen::prelude::*;

use crate::galaxy::{GalaxyConfig, compute_galaxy_json};
use crate::logging;

#[wasm_bindgen(start)]
pub fn start() {
    logging::init(LevelFilter::Info);
}

/// Lay out a galaxy for a search result.
///
/// Takes a JSON `GalaxyRequest` (`term`, optional `entry`, optional `config`)
/// and returns a JSON `GalaxyOutput`. Errors are reported in its `error` field.
#[wasm_bindgen]
pub fn compute_galaxy(request: &str) -> String {
    compute_galaxy_json(request)
}

/// Default configuration as JSON, for the host to tweak and send back.
#[wasm_bindgen]
pub fn default_config() -> String {
    serde_json::to_string(&GalaxyConfig::default()).unwrap_or_else(|_| "{}".to_string())
}

#[wasm_bindgen]
pub fn set_log_level(level: &str) {
    logging::init(logging::parse_level(level));
}
