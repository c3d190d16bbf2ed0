//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

impl Config {
    /// Create configuration from environment variables
    ///
    /// Reads `FORMCHECK_LOG` (falling back to `RUST_LOG`) for the filter and
    /// `FORMCHECK_LOG_FORMAT` for the output format.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().overlay_env()
    }

    /// Applies the logging environment variables on top of `self`.
    ///
    /// Unset variables leave the configured values alone; an unknown
    /// `FORMCHECK_LOG_FORMAT` is ignored.
    #[must_use]
    pub fn overlay_env(mut self) -> Self {
        if let Ok(level) = std::env::var("FORMCHECK_LOG") {
            self.level = level;
        } else if let Ok(level) = std::env::var("RUST_LOG") {
            self.level = level;
        }

        if let Ok(format) = std::env::var("FORMCHECK_LOG_FORMAT") {
            if let Ok(format) = format.parse() {
                self.format = format;
            }
        }

        self.display.parse_env();
        self
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
