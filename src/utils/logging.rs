//! File-backed logger setup.
//!
//! The terminal is owned by the game screen, so log records go to
//! ~/.flapterm/flapterm.log instead of stderr.

use crate::constants::LOG_FILE;
use crate::utils::persistence;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;

/// Install the global logger. Filter comes from `RUST_LOG`, default `info`.
///
/// Returns `false` when the log file could not be opened; logging stays
/// disabled in that case and the game runs normally.
pub fn init() -> bool {
    let path = match persistence::save_path(LOG_FILE) {
        Ok(path) => path,
        Err(_) => return false,
    };
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .is_ok()
}
