//! JSON writer for structured logging

use crate::core::{Downstream, JsonRecord, LogEntry, LoggerError, Result, TimestampFormat};
use parking_lot::Mutex;
use std::io::Write;

/// Newline-delimited JSON writer
///
/// Writes each log entry as a single-line JSON object (JSONL format), see
/// [`JsonRecord`] for the fields. Compatible with log aggregation tools like
/// ELK, Loki, etc.
pub struct JsonWriter<W: Write + Send> {
    dest: Mutex<W>,
    timestamp_format: TimestampFormat,
}

impl<W: Write + Send> JsonWriter<W> {
    pub fn new(dest: W) -> Self {
        Self {
            dest: Mutex::new(dest),
            timestamp_format: TimestampFormat::default(),
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Give back the destination
    pub fn into_inner(self) -> W {
        self.dest.into_inner()
    }

    /// Render an entry as a JSON line, without the trailing newline
    pub fn render(&self, entry: &LogEntry) -> Result<String> {
        JsonRecord::from_entry(entry, &self.timestamp_format)?.to_json()
    }
}

impl<W: Write + Send> Downstream for JsonWriter<W> {
    fn accept(&self, entry: LogEntry) -> Result<bool> {
        let json = self.render(&entry)?;

        let mut dest = self.dest.lock();
        writeln!(dest, "{}", json)
            .and_then(|()| dest.flush())
            .map_err(|e| LoggerError::io_operation("writing log entry", "json writer", e))?;
        Ok(true)
    }

    fn name(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldMap, Severity};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_json_writer_to_file() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.jsonl");

        let writer = JsonWriter::new(fs::File::create(&log_path)?);
        let entry = LogEntry::new(Severity::Info)
            .with_message("User logged in")
            .with_context(FieldMap::new().with_field("user_id", 123).with_field("action", "login"));

        assert!(writer.accept(entry)?);

        let content = fs::read_to_string(&log_path)?;
        let parsed: serde_json::Value = serde_json::from_str(content.trim_end())?;
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["message"], "User logged in");
        assert_eq!(parsed["context"]["user_id"], 123);

        Ok(())
    }

    #[test]
    fn test_json_writer_multiple_entries() -> Result<()> {
        let writer = JsonWriter::new(Vec::new());

        for i in 0..5 {
            let entry = LogEntry::new(Severity::Debug)
                .with_message(format!("Iteration {}", i))
                .with_data(FieldMap::new().with_field("iteration", i));
            writer.accept(entry)?;
        }

        let content = String::from_utf8(writer.into_inner()).expect("utf-8 output");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 5);

        // Each line should be valid JSON
        for line in lines {
            let parsed: serde_json::Value = serde_json::from_str(line)?;
            assert!(parsed["message"].is_string());
            assert_eq!(parsed["severity"], "DEBUG");
        }

        Ok(())
    }

    #[test]
    fn test_unserializable_data_is_an_error() {
        let writer = JsonWriter::new(Vec::new());
        let entry = LogEntry::new(Severity::Info)
            .with_data(FieldMap::new().with_field("ratio", f64::NAN));

        let err = writer.accept(entry).unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));
        assert!(writer.into_inner().is_empty());
    }
}
