//! Logger setup for the `gallery` binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Crates whose debug output (spawns, hits, misses) `--verbose` enables.
const GALLERY_CRATES: [&str; 3] = ["gallery_core", "gallery_sim", "gallery_app"];

/// Install `env_logger` as the global logger at info level.
///
/// `verbose` raises the gallery crates to debug without flooding the
/// output with dependency logs. An explicit `RUST_LOG` wins over both.
/// Returns false if a logger was already installed.
pub fn init(verbose: bool) -> bool {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    if verbose && std::env::var_os("RUST_LOG").is_none() {
        for name in GALLERY_CRATES {
            builder.filter_module(name, LevelFilter::Debug);
        }
    }
    builder.format_timestamp_millis();
    builder.try_init().is_ok()
}
