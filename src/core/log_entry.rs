//! Log entry structure

use super::captured_error::CapturedError;
use super::field_map::FieldMap;
use super::severity::Severity;
use chrono::{DateTime, Utc};

/// One log event
///
/// Entries travel down a chain by value. A layer that decorates an entry
/// consumes it and forwards the result, so whoever held it before never
/// observes the change.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: Option<String>,
    pub data: Option<FieldMap>,
    pub exception: Option<CapturedError>,
    pub context: FieldMap,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            message: None,
            data: None,
            exception: None,
            context: FieldMap::new(),
            timestamp: Utc::now(),
        }
    }

    /// Build an entry from a classified payload
    pub fn from_payload(severity: Severity, payload: Payload) -> Self {
        let mut entry = Self::new(severity);
        entry.apply(payload);
        entry
    }

    pub(crate) fn apply(&mut self, payload: Payload) {
        match payload {
            Payload::Empty => {}
            Payload::Message(message) => self.message = Some(message),
            Payload::Data(data) => self.data = Some(data),
            Payload::Exception(exception) => self.exception = Some(exception),
        }
    }

    /// Merge `context` underneath this entry's own context
    ///
    /// Keys the entry already carries win over keys from `context`.
    #[must_use]
    pub fn in_context(mut self, context: &FieldMap) -> Self {
        self.context.merge_defaults(context);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: FieldMap) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_exception(mut self, exception: CapturedError) -> Self {
        self.exception = Some(exception);
        self
    }

    #[must_use]
    pub fn with_context(mut self, context: FieldMap) -> Self {
        self.context = context;
        self
    }
}

/// The primary content handed to `Logger::log`
///
/// A message, a data mapping, or an error, classified once when the call is
/// made.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    #[default]
    Empty,
    Message(String),
    Data(FieldMap),
    Exception(CapturedError),
}

impl Payload {
    /// Capture an error as the payload
    pub fn error<E: std::error::Error + 'static>(error: &E) -> Self {
        Payload::Exception(CapturedError::capture(error))
    }
}

impl From<()> for Payload {
    fn from(_: ()) -> Self {
        Payload::Empty
    }
}

impl From<&str> for Payload {
    fn from(message: &str) -> Self {
        Payload::Message(message.to_string())
    }
}

impl From<String> for Payload {
    fn from(message: String) -> Self {
        Payload::Message(message)
    }
}

impl From<&String> for Payload {
    fn from(message: &String) -> Self {
        Payload::Message(message.clone())
    }
}

impl From<FieldMap> for Payload {
    fn from(data: FieldMap) -> Self {
        Payload::Data(data)
    }
}

impl From<CapturedError> for Payload {
    fn from(exception: CapturedError) -> Self {
        Payload::Exception(exception)
    }
}

impl<P: Into<Payload>> From<Option<P>> for Payload {
    fn from(payload: Option<P>) -> Self {
        payload.map_or(Payload::Empty, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;

    #[test]
    fn test_string_payload_sets_message() {
        let entry = LogEntry::from_payload(Severity::Info, "Stuff happened".into());
        assert_eq!(entry.message.as_deref(), Some("Stuff happened"));
        assert!(entry.data.is_none());
        assert!(entry.exception.is_none());
    }

    #[test]
    fn test_map_payload_sets_data() {
        let data = FieldMap::new().with_field("x", 1).with_field("y", 2);
        let entry = LogEntry::from_payload(Severity::Info, data.clone().into());
        assert_eq!(entry.data, Some(data));
        assert!(entry.message.is_none());
    }

    #[test]
    fn test_error_payload_sets_exception() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "Ah, bugger!");
        let entry = LogEntry::from_payload(Severity::Error, Payload::error(&err));
        assert_eq!(entry.exception.map(|e| e.message), Some("Ah, bugger!".to_string()));
    }

    #[test]
    fn test_empty_payload_leaves_fields_unset() {
        let entry = LogEntry::from_payload(Severity::Warn, Payload::from(None::<&str>));
        assert!(entry.message.is_none());
        assert!(entry.data.is_none());
        assert!(entry.exception.is_none());
        assert!(entry.context.is_empty());
    }

    #[test]
    fn test_in_context_keeps_entry_keys() {
        let entry = LogEntry::new(Severity::Info)
            .with_context(FieldMap::new().with_field("request_id", "inner"));
        let layer = FieldMap::new()
            .with_field("request_id", "outer")
            .with_field("thread", "main");

        let merged = entry.clone().in_context(&layer);

        assert_eq!(merged.context.get("request_id"), Some(&FieldValue::from("inner")));
        assert_eq!(merged.context.get("thread"), Some(&FieldValue::from("main")));
        // the original value is untouched
        assert_eq!(entry.context.len(), 1);
    }
}
