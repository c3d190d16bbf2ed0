//! Writer and display configuration

use serde::{Deserialize, Serialize};

/// Writer configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[non_exhaustive]
pub enum WriterConfig {
    /// Write to stderr
    #[default]
    Stderr,
    /// Write to stdout
    Stdout,
    /// Append to a file
    File {
        /// Path to the log file
        path: std::path::PathBuf,
    },
}

/// Display configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show the event target (module path)
    pub target: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// ANSI colors
    pub colors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            target: true,
            source: false,
            colors: false,
        }
    }
}

impl DisplayConfig {
    pub(super) fn parse_env(&mut self) {
        if let Ok(v) = std::env::var("FORMCHECK_LOG_TIME") {
            self.time = v != "0" && v != "false";
        }
        if let Ok(v) = std::env::var("FORMCHECK_LOG_SOURCE") {
            self.source = v != "0" && v != "false";
        }
        if let Ok(v) = std::env::var("FORMCHECK_LOG_COLORS") {
            self.colors = v != "0" && v != "false";
        }
    }
}
