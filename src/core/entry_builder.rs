//! Mutable draft of a log entry handed to configuration callbacks
//!
//! # Example
//!
//! ```
//! use green_log::prelude::*;
//!
//! let sink = MemoryWriter::new();
//! let logger = Logger::new(sink.clone());
//!
//! logger.info_with(|entry| {
//!     entry
//!         .message("Request processed")
//!         .field("user_id", 12345)
//!         .field("status", 200)
//!         .context_field("request_id", "abc-123");
//! })?;
//!
//! let logged = sink.last().unwrap();
//! assert_eq!(logged.message.as_deref(), Some("Request processed"));
//! # Ok::<(), green_log::LoggerError>(())
//! ```

use super::captured_error::CapturedError;
use super::field_map::{FieldMap, FieldValue};
use super::log_entry::{LogEntry, Payload};
use super::severity::Severity;

/// Builder for a single log entry
pub struct EntryBuilder {
    entry: LogEntry,
}

impl EntryBuilder {
    pub fn new(severity: Severity) -> Self {
        Self {
            entry: LogEntry::new(severity),
        }
    }

    /// Start from an existing entry, to derive a copy with overrides
    pub fn from_entry(entry: LogEntry) -> Self {
        Self { entry }
    }

    /// Start from a classified payload
    pub fn from_payload(severity: Severity, payload: Payload) -> Self {
        Self::from_entry(LogEntry::from_payload(severity, payload))
    }

    pub fn severity(&self) -> Severity {
        self.entry.severity
    }

    /// Set the log message
    pub fn message(&mut self, message: impl Into<String>) -> &mut Self {
        self.entry.message = Some(message.into());
        self
    }

    /// Replace the data mapping
    pub fn data(&mut self, data: FieldMap) -> &mut Self {
        self.entry.data = Some(data);
        self
    }

    /// Add a single data field
    pub fn field<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entry.data.get_or_insert_with(FieldMap::new).insert(key, value);
        self
    }

    pub fn exception(&mut self, exception: CapturedError) -> &mut Self {
        self.entry.exception = Some(exception);
        self
    }

    /// Capture an error as the exception
    pub fn error<E: std::error::Error + 'static>(&mut self, error: &E) -> &mut Self {
        self.exception(CapturedError::capture(error))
    }

    /// Replace the entry-level context
    pub fn context(&mut self, context: FieldMap) -> &mut Self {
        self.entry.context = context;
        self
    }

    /// Add a single context field
    pub fn context_field<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.entry.context.insert(key, value);
        self
    }

    pub fn build(self) -> LogEntry {
        self.entry
    }
}
