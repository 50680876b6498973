//! File logging.
//!
//! The terminal is owned by the UI, so log records go to
//! `<cache dir>/circuitry.log` instead of stderr. `RUST_LOG` sets the filter.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use env_logger::{Env, Target};

const LOG_FILE: &str = "circuitry.log";

/// Path of the log file, if the platform has a cache directory.
pub fn log_path() -> Option<PathBuf> {
    circuitry_config::Config::project_dirs().map(|dirs| dirs.cache_dir().join(LOG_FILE))
}

/// Install the global logger. Logging stays disabled if the file cannot be opened.
pub fn init() {
    let Some(path) = log_path() else {
        return;
    };
    if let Some(parent) = path.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
}
