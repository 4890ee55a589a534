//! File logging.
//!
//! The terminal is in raw mode with the alternate screen up, so log lines go
//! to `localquest.log` in the data directory instead of stderr.

use crate::constants::LOG_FILE;
use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Maps `-v` counts to a level. `RUST_LOG` still wins when set.
pub fn level_for_verbosity(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

pub fn init_logging(data_dir: &Path, verbosity: u8) -> Result<()> {
    fs::create_dir_all(data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(data_dir.join(LOG_FILE))?;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for_verbosity(verbosity))
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|fmt, record| {
            writeln!(
                fmt,
                "{} [{}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        });

    // A second init (e.g. from tests) keeps the first logger
    if let Err(e) = builder.try_init() {
        log::debug!("Logger already installed, keeping it: {}", e);
    }
    Ok(())
}
