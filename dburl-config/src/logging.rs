//! Logging bootstrap for dburl.
//!
//! The library itself only emits `tracing` events; installing a subscriber is
//! left to binaries. [`init`] is the stock one, controlled by:
//!
//! - `DBURL_DEBUG=true|1|yes` - Enable debug logging
//! - `DBURL_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `DBURL_LOG_FORMAT=json|pretty|compact` - Output format (default: compact)
//!
//! ```rust,no_run
//! use dburl_config::logging;
//!
//! logging::init();
//! ```

use crate::env::{EnvSource, StdEnvSource};
use std::sync::Once;

static INIT: Once = Once::new();

/// Variable enabling debug output.
pub const DEBUG_VAR: &str = "DBURL_DEBUG";
/// Variable selecting the log level.
pub const LEVEL_VAR: &str = "DBURL_LOG_LEVEL";
/// Variable selecting the output format.
pub const FORMAT_VAR: &str = "DBURL_LOG_FORMAT";

/// Check if debug logging is enabled via `DBURL_DEBUG`.
#[inline]
pub fn is_debug_enabled() -> bool {
    debug_enabled_in(&StdEnvSource)
}

/// Check `DBURL_DEBUG` in the given source.
pub fn debug_enabled_in<S: EnvSource + ?Sized>(source: &S) -> bool {
    source
        .get(DEBUG_VAR)
        .map(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
        .unwrap_or(false)
}

/// Log level from `DBURL_LOG_LEVEL`, else "debug" when debugging, else "warn".
pub fn log_level_in<S: EnvSource + ?Sized>(source: &S) -> &'static str {
    let fallback = if debug_enabled_in(source) { "debug" } else { "warn" };
    match source.get(LEVEL_VAR).map(|l| l.to_lowercase()).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("info") => "info",
        Some("warn") => "warn",
        Some("error") => "error",
        _ => fallback,
    }
}

/// Output format from `DBURL_LOG_FORMAT`.
pub fn log_format_in<S: EnvSource + ?Sized>(source: &S) -> &'static str {
    match source.get(FORMAT_VAR).map(|f| f.to_lowercase()).as_deref() {
        Some("json") => "json",
        Some("pretty") => "pretty",
        _ => "compact",
    }
}

/// Get the configured log level from the process environment.
pub fn get_log_level() -> &'static str {
    log_level_in(&StdEnvSource)
}

/// Get the configured log format from the process environment.
pub fn get_log_format() -> &'static str {
    log_format_in(&StdEnvSource)
}

/// Install the dburl tracing subscriber.
///
/// No-op unless `DBURL_DEBUG` or `DBURL_LOG_LEVEL` is set, and on every call
/// after the first. Without the `tracing-subscriber` feature events are only
/// seen by a subscriber the application installs itself.
pub fn init() {
    INIT.call_once(|| {
        if !is_debug_enabled() && !StdEnvSource.contains(LEVEL_VAR) {
            return;
        }

        #[cfg(feature = "tracing-subscriber")]
        {
            use tracing_subscriber::{EnvFilter, fmt, prelude::*};

            let level = get_log_level();
            let filter = EnvFilter::try_new(format!(
                "dburl={level},dburl_config={level},dburl_cli={level}"
            ))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

            let registry = tracing_subscriber::registry().with(filter);
            let installed = match get_log_format() {
                "json" => registry
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .try_init(),
                "pretty" => registry
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .try_init(),
                _ => registry
                    .with(fmt::layer().compact().with_writer(std::io::stderr))
                    .try_init(),
            };

            if installed.is_ok() {
                tracing::info!(level, format = get_log_format(), "dburl logging initialized");
            }
        }
    });
}
