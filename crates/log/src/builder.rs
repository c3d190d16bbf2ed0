//! Logger builder implementation

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::LogError;
use crate::config::{Config, Format, WriterConfig};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Registers `$layer` on top of the filter, with or without timestamps.
macro_rules! init_layer {
    ($filter:expr, $layer:expr, $time:expr) => {{
        let layer = $layer;
        if $time {
            Registry::default().with($filter).with(layer).try_init()
        } else {
            Registry::default()
                .with($filter)
                .with(layer.without_time())
                .try_init()
        }
    }};
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber
    ///
    /// Fails if the filter cannot be parsed, the log file cannot be opened,
    /// or a global subscriber is already installed.
    pub fn build(self) -> Result<(), LogError> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        let writer = make_writer(&self.config.writer)?;
        let display = &self.config.display;

        let installed = match self.config.format {
            Format::Pretty => init_layer!(
                filter,
                fmt::layer()
                    .pretty()
                    .with_writer(writer)
                    .with_ansi(display.colors)
                    .with_target(display.target)
                    .with_file(display.source)
                    .with_line_number(display.source),
                display.time
            ),
            Format::Compact => init_layer!(
                filter,
                fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_ansi(display.colors)
                    .with_target(display.target)
                    .with_file(display.source)
                    .with_line_number(display.source),
                display.time
            ),
            Format::Json => init_layer!(
                filter,
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(display.target)
                    .with_file(display.source)
                    .with_line_number(display.source),
                display.time
            ),
        };

        installed.map_err(|e| LogError::Init(e.to_string()))?;
        tracing::debug!(level = %self.config.level, format = ?self.config.format, "logger initialized");
        Ok(())
    }
}

/// Create a writer from configuration
fn make_writer(config: &WriterConfig) -> Result<BoxMakeWriter, LogError> {
    let writer = match config {
        WriterConfig::Stderr => BoxMakeWriter::new(io::stderr),
        WriterConfig::Stdout => BoxMakeWriter::new(io::stdout),
        WriterConfig::File { path } => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LogError::Writer {
                    path: path.clone(),
                    source,
                })?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };
    Ok(writer)
}
