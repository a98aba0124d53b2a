//! Logger initialization
//!
//! Diagnostics go through the `log` facade to stderr so stdout carries only
//! results.

use log::LevelFilter;
use std::env;

/// Level used when `RUST_LOG` is not set
///
/// `verbose` wins over `quiet`; a quiet run keeps warnings only.
#[must_use]
pub const fn default_level(verbose: bool, quiet: bool) -> LevelFilter {
    match (verbose, quiet) {
        (true, _) => LevelFilter::Debug,
        (false, true) => LevelFilter::Warn,
        (false, false) => LevelFilter::Info,
    }
}

/// Initialize the global logger at `level`
///
/// An explicit `RUST_LOG` overrides the level. Calling this more than once is
/// harmless.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_level(level >= LevelFilter::Debug)
        .format_target(false);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level} level");
    }
}
