//! File logging, enabled by `RUST_LOG`.
//!
//! The terminal is owned by the animation, so log records go to
//! `treelight.log` in the temp directory instead of stderr.

use std::fs::File;

use env_logger::{Builder, Env, Target};

const LOG_FILE: &str = "treelight.log";

pub fn init() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let Ok(file) = File::create(std::env::temp_dir().join(LOG_FILE)) else {
        return;
    };

    // Logging is optional; if a logger is already set, keep it.
    let _ = Builder::from_env(Env::default().default_filter_or("off"))
        .target(Target::Pipe(Box::new(file)))
        .try_init();
}
