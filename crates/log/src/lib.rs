//! # Latch Log
//!
//! Logging bootstrap shared by latch binaries and tests.
//!
//! Library crates only emit `tracing` events; whoever owns the process picks a
//! [`Config`] and installs a subscriber once:
//!
//! ```no_run
//! use latch_log::{Config, init};
//!
//! // LATCH_LOG / RUST_LOG pick the filter, LATCH_LOG_FORMAT the output format.
//! init(Config::from_env()).expect("logger");
//! tracing::info!("ready");
//! ```

mod builder;
mod config;
mod core;

pub use crate::builder::LoggerBuilder;
pub use crate::config::{Config, DisplayConfig, Format, Writer};
pub use crate::core::{LogError, LogResult};

/// Install a global subscriber built from `config`
///
/// # Errors
///
/// - [`LogError::Filter`] if the level directive cannot be parsed
/// - [`LogError::AlreadyInitialized`] if a global subscriber is already set
pub fn init(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}

/// Like [`init`], but an existing global subscriber is not an error
///
/// Meant for test helpers that may run more than once per process.
pub fn try_init(config: Config) -> LogResult<()> {
    match init(config) {
        Err(LogError::AlreadyInitialized(_)) => Ok(()),
        other => other,
    }
}
