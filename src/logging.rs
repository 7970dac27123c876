// src/logging.rs

//! Logging setup for `pathfinder` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `PATHFINDER_LOG` environment variable: a plain level ("debug") or any
//!    `EnvFilter` directive list ("pathfinder::dag=trace,info")
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that stdout carries only command output
//! (which may be JSON).

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV: &str = "PATHFINDER_LOG";

/// Initialise global logging subscriber.
///
/// Safe to call once at startup; a second call returns an error.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let filter = match cli_level {
        Some(lvl) => EnvFilter::new(directive_for(lvl)),
        None => std::env::var(LOG_ENV)
            .ok()
            .and_then(|s| parse_filter_str(&s))
            .unwrap_or_else(|| EnvFilter::new("info")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))
}

fn directive_for(lvl: LogLevel) -> &'static str {
    match lvl {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

fn parse_filter_str(s: &str) -> Option<EnvFilter> {
    let trimmed = s.trim().to_lowercase();
    let directive = match trimmed.as_str() {
        "" => return None,
        "warning" => "warn",
        other => other,
    };
    EnvFilter::try_new(directive).ok()
}
