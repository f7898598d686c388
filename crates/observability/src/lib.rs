//! Tracing and logging setup shared by every TravelHome process.

/// Logging configuration (filter + output format).
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// Falls back to defaults when the environment is malformed. Safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_default();
    self::tracing::init_with(&config);
}
