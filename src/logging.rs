// src/logging.rs

//! Logging setup for `jexec` using `tracing` + `tracing-subscriber`, plus
//! the advisory sink the launcher reports non-fatal conditions through.
//!
//! Priority for determining the log level:
//! 1. explicit level passed by the embedding framework (if provided)
//! 2. `JEXEC_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Logs are sent to STDERR so that stdout stays free for the launched
//! program's own output.

use std::fmt::Debug;

use anyhow::Result;
use tracing_subscriber::fmt;

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(level: Option<tracing::Level>) -> Result<()> {
    let level = match level {
        Some(lvl) => lvl,
        None => std::env::var("JEXEC_LOG")
            .ok()
            .and_then(|s| parse_level_str(&s))
            .unwrap_or(tracing::Level::INFO),
    };

    // Send logs to stderr; keep stdout free for target program output.
    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}

/// Fire-and-forget sink for advisory messages.
///
/// The launcher reports ignored-field warnings and launch boundaries here
/// instead of calling `tracing` directly, so tests can record what was
/// emitted. Implementations must never fail or block.
pub trait AdvisorySink: Send + Sync + Debug {
    fn warn(&self, msg: &str);
    fn debug(&self, msg: &str);
}

/// Default sink forwarding to the `tracing` macros.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }
}
