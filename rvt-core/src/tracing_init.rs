//! Tracing initialization for rvt
//!
//! Uses the standard `RUST_LOG` variable for filtering:
//! - `RUST_LOG=debug` - Set global level
//! - `RUST_LOG=rvt=info,rvt_core=debug` - Set per-module levels
//!
//! Uses `RUST_LOG_FORMAT` for output format (optional):
//! - `json` - JSON formatted output
//! - `pretty` - Pretty formatted output
//! - `compact` - Compact single-line output (default)
//!
//! Events are written to stderr so they never interleave with the inherited
//! output of the external tools on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{Result, ScaffoldError};

/// Initialize with the default `warn` filter.
pub fn init() -> Result<()> {
    init_with_defaults("warn")
}

/// Initialize with a default filter if `RUST_LOG` is not set
///
/// # Arguments
/// * `default_filter` - The filter string to use if `RUST_LOG` is not set (e.g., "info", "debug")
pub fn init_with_defaults(default_filter: &str) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format.as_str() {
        "json" => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false).json())
            .try_init(),
        "pretty" => registry
            .with(fmt::layer().with_writer(std::io::stderr).pretty())
            .try_init(),
        _ => registry
            .with(fmt::layer().with_writer(std::io::stderr).compact())
            .try_init(),
    };

    result.map_err(|e| ScaffoldError::Logging(e.to_string()))
}

/// Initialize for testing; safe to call from several tests.
#[cfg(any(test, feature = "test-helpers"))]
pub fn init_for_testing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}
