//! Logging setup shared by every host that embeds the cellar analytics.
//!
//! The library crates only emit `tracing` events; installing a subscriber is the
//! host's call, through [`init`] or [`init_with`].

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init_with(&self::tracing::LogConfig::from_env());
}

pub use self::tracing::{LOG_FORMAT_ENV, LogConfig, LogFormat, init_with};

/// Subscriber configuration (filters, formats).
pub mod tracing;
