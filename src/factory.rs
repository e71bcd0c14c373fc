//! Assembling default chains
//!
//! The factory turns a handful of named options into a ready [`Logger`]:
//! a writer picked from a [`WriterRegistry`], optionally wrapped in a
//! [`SeverityFilter`], writing to an explicit [`Destination`].
//!
//! # Example
//!
//! ```
//! use green_log::prelude::*;
//!
//! let logger = Logger::builder()
//!     .dest(Destination::Stderr)
//!     .format("json")
//!     .severity_threshold(Severity::Warn)
//!     .build()?;
//!
//! assert_eq!(logger.severity_threshold(), Severity::Warn);
//! # Ok::<(), green_log::LoggerError>(())
//! ```

use crate::core::{Downstream, Logger, Result, Severity, TimestampFormat};
use crate::middleware::SeverityFilter;
use crate::writers::{BoxedDest, WriterConstructor, WriterOptions, WriterRegistry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Where rendered entries go
#[derive(Default)]
pub enum Destination {
    #[default]
    Stdout,
    Stderr,
    Writer(BoxedDest),
}

impl Destination {
    pub fn into_writer(self) -> BoxedDest {
        match self {
            Destination::Stdout => Box::new(std::io::stdout()),
            Destination::Stderr => Box::new(std::io::stderr()),
            Destination::Writer(writer) => writer,
        }
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => f.write_str("Stdout"),
            Destination::Stderr => f.write_str("Stderr"),
            Destination::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

/// Which writer to build: a registered name, or a constructor
#[derive(Clone)]
pub enum Format {
    Named(String),
    Custom(WriterConstructor),
}

impl Default for Format {
    fn default() -> Self {
        Format::Named(DEFAULT_FORMAT.to_string())
    }
}

impl From<&str> for Format {
    fn from(name: &str) -> Self {
        Format::Named(name.to_string())
    }
}

impl From<String> for Format {
    fn from(name: String) -> Self {
        Format::Named(name)
    }
}

impl fmt::Debug for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Format::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

const DEFAULT_FORMAT: &str = "simple";

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

/// Serializable logger settings
///
/// ```
/// use green_log::{LoggerConfig, Severity};
///
/// let config = LoggerConfig::from_json(r#"{"format": "json", "severity_threshold": "WARN"}"#)?;
/// assert_eq!(config.severity_threshold, Some(Severity::Warn));
/// # Ok::<(), green_log::LoggerError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default)]
    pub severity_threshold: Option<Severity>,
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
    #[serde(default)]
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            severity_threshold: None,
            timestamp_format: TimestampFormat::default(),
            colors: false,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Builder for constructing a Logger with a fluent API
pub struct LoggerBuilder {
    dest: Destination,
    format: Format,
    severity_threshold: Option<Severity>,
    level: Severity,
    options: WriterOptions,
    registry: WriterRegistry,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            dest: Destination::default(),
            format: Format::default(),
            severity_threshold: None,
            level: Severity::Debug,
            options: WriterOptions::default(),
            registry: WriterRegistry::with_defaults(),
        }
    }

    /// Start from serialized settings
    pub fn from_config(config: &LoggerConfig) -> Self {
        let builder = Self::new()
            .format(config.format.as_str())
            .timestamp_format(config.timestamp_format.clone())
            .colors(config.colors);
        match config.severity_threshold {
            Some(threshold) => builder.severity_threshold(threshold),
            None => builder,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn dest(mut self, dest: Destination) -> Self {
        self.dest = dest;
        self
    }

    /// Writer format, by registered name or constructor
    #[must_use = "builder methods return a new value"]
    pub fn format(mut self, format: impl Into<Format>) -> Self {
        self.format = format.into();
        self
    }

    /// Wrap the writer in a severity filter
    #[must_use = "builder methods return a new value"]
    pub fn severity_threshold(mut self, threshold: Severity) -> Self {
        self.severity_threshold = Some(threshold);
        self
    }

    /// The built logger's own level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.options.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, colors: bool) -> Self {
        self.options.colors = colors;
        self
    }

    /// Resolve format names against `registry` instead of the defaults
    #[must_use = "builder methods return a new value"]
    pub fn registry(mut self, registry: WriterRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Build the Logger
    ///
    /// Fails with `UnknownFormat` if a format name is not registered, and with
    /// `InvalidConfiguration` if a custom timestamp pattern cannot be rendered.
    pub fn build(self) -> Result<Logger> {
        self.options.timestamp_format.validate()?;

        let dest = self.dest.into_writer();
        let writer = match self.format {
            Format::Named(ref name) => self.registry.create(name, dest, &self.options)?,
            Format::Custom(ref constructor) => constructor(dest, &self.options),
        };

        let chain: Arc<dyn Downstream> = match self.severity_threshold {
            Some(threshold) => Arc::new(SeverityFilter::new(writer, threshold)),
            None => writer,
        };

        let mut logger = Logger::from_arc(chain);
        logger.set_level(self.level)?;
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use green_log::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .format("simple")
    ///     .severity_threshold(Severity::Info)
    ///     .build()?;
    /// # Ok::<(), green_log::LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

/// Build a logger from settings, writing to `dest`
pub fn build(config: &LoggerConfig, dest: Destination) -> Result<Logger> {
    LoggerBuilder::from_config(config).dest(dest).build()
}

/// A logger that discards everything
pub fn null() -> Logger {
    Logger::null()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use crate::writers::NullWriter;
    use parking_lot::Mutex;
    use std::io::Write;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().clone()).expect("utf-8 output")
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_builder_default_is_simple_without_filter() {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .dest(Destination::Writer(Box::new(buffer.clone())))
            .build()
            .unwrap();

        assert_eq!(logger.downstream().name(), "simple");
        assert_eq!(logger.severity_threshold(), Severity::Debug);

        logger.info("Stuff happened").unwrap();
        assert!(buffer.contents().contains("INFO  -- Stuff happened"));
    }

    #[test]
    fn test_builder_json_with_threshold() {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .dest(Destination::Writer(Box::new(buffer.clone())))
            .format("json")
            .severity_threshold(Severity::Warn)
            .build()
            .unwrap();

        assert_eq!(logger.downstream().name(), "severity_filter");
        assert!(!logger.info("Boring stuff").unwrap());
        assert!(logger.error("Bad stuff").unwrap());

        let contents = buffer.contents();
        assert_eq!(contents.lines().count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(contents.trim_end()).unwrap();
        assert_eq!(parsed["severity"], "ERROR");
    }

    #[test]
    fn test_unknown_format_fails() {
        let err = Logger::builder().format("xml").build().unwrap_err();
        assert!(matches!(err, LoggerError::UnknownFormat { .. }));
    }

    #[test]
    fn test_custom_format_constructor() {
        let constructor: WriterConstructor =
            Arc::new(|_dest: BoxedDest, _options: &WriterOptions| -> Arc<dyn Downstream> {
                Arc::new(NullWriter::new())
            });
        let logger = Logger::builder().format(Format::Custom(constructor)).build().unwrap();
        assert_eq!(logger.downstream().name(), "null");
    }

    #[test]
    fn test_build_from_config() {
        let buffer = SharedBuffer::default();
        let config = LoggerConfig {
            format: "simple".to_string(),
            severity_threshold: Some(Severity::Error),
            timestamp_format: TimestampFormat::Unix,
            colors: false,
        };

        let logger = build(&config, Destination::Writer(Box::new(buffer.clone()))).unwrap();
        assert_eq!(logger.severity_threshold(), Severity::Error);

        logger.fatal("down").unwrap();
        assert!(buffer.contents().contains("FATAL -- down"));
    }

    #[test]
    fn test_invalid_timestamp_pattern_rejected() {
        let buffer = SharedBuffer::default();
        let config = LoggerConfig::from_json(r#"{"timestamp_format": {"Custom": "%Q"}}"#).unwrap();

        let err = build(&config, Destination::Writer(Box::new(buffer.clone())))
            .err()
            .expect("pattern should be rejected");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(buffer.contents().is_empty());
    }

    #[test]
    fn test_config_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_null_logger() {
        assert!(null().fatal("ignored").unwrap());
    }
}
