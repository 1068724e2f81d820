//! Logging setup
//!
//! Warnings about unreadable folders and notes go to stderr through
//! `tracing`. `RUST_LOG` overrides the configured level.

use crate::error::{MirrorError, Result};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

const LEVELS: [LevelFilter; 5] = [
    LevelFilter::ERROR,
    LevelFilter::WARN,
    LevelFilter::INFO,
    LevelFilter::DEBUG,
    LevelFilter::TRACE,
];

/// Install the stderr subscriber. Calling it again is a no-op.
pub fn init(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_filter(filter);

    let _ = tracing_subscriber::registry().with(layer).try_init();
}

/// Parse a level name from the config file
pub fn parse_level(s: &str) -> Result<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Ok(LevelFilter::ERROR),
        "warn" => Ok(LevelFilter::WARN),
        "info" => Ok(LevelFilter::INFO),
        "debug" => Ok(LevelFilter::DEBUG),
        "trace" => Ok(LevelFilter::TRACE),
        _ => Err(MirrorError::Config(format!(
            "Invalid log level '{}' (expected error, warn, info, debug or trace)",
            s
        ))),
    }
}

/// Adjust `base` by the command line's `-v` count or `-q` flag
pub fn effective_level(base: LevelFilter, verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }

    let start = LEVELS.iter().position(|l| *l == base).unwrap_or(1);
    let index = (start + usize::from(verbose)).min(LEVELS.len() - 1);
    LEVELS[index]
}
