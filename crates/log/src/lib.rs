//! # formcheck-log
//!
//! Logging setup for the formcheck tools: a serde-friendly [`Config`] that
//! can live in a TOML file, env-driven presets, and a builder that installs
//! a `tracing-subscriber` registry with an `EnvFilter`.
//!
//! ```rust,no_run
//! formcheck_log::init_with(formcheck_log::Config::from_env())?;
//! tracing::info!(rules = 6, "ready");
//! # Ok::<(), formcheck_log::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format, WriterConfig};

/// Error type for logger setup
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Filter parsing error
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The filter string as configured
        filter: String,
        /// Parser message
        reason: String,
    },

    /// The log file could not be opened
    #[error("cannot open log file '{}': {source}", path.display())]
    Writer {
        /// Configured path
        path: std::path::PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// A global subscriber is already installed
    #[error("logger already initialized: {0}")]
    Init(String),
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> Result<(), LogError> {
    LoggerBuilder::from_config(config).build()
}
