//! Human-readable single-line writer
//!
//! Each entry becomes one line:
//!
//! ```text
//! [2025-01-08T10:30:45.123Z] INFO  -- Stuff happened data={x=1 y=2} exception=Timeout: too slow context={thread=main}
//! ```
//!
//! Parts that are unset (or empty) are left out; the order never changes.

use crate::core::{Downstream, LogEntry, LoggerError, Result, TimestampFormat};
use parking_lot::Mutex;
use std::io::Write;

pub struct SimpleWriter<W: Write + Send> {
    dest: Mutex<W>,
    timestamp_format: Option<TimestampFormat>,
    use_colors: bool,
}

impl<W: Write + Send> SimpleWriter<W> {
    pub fn new(dest: W) -> Self {
        Self {
            dest: Mutex::new(dest),
            timestamp_format: Some(TimestampFormat::default()),
            use_colors: false,
        }
    }

    /// Set the timestamp format for this writer
    ///
    /// # Examples
    ///
    /// ```
    /// use green_log::writers::SimpleWriter;
    /// use green_log::TimestampFormat;
    ///
    /// let writer = SimpleWriter::new(std::io::stderr())
    ///     .with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = Some(format);
        self
    }

    /// Leave the timestamp out of rendered lines
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    /// Color the severity name (only with the `color` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Give back the destination
    pub fn into_inner(self) -> W {
        self.dest.into_inner()
    }

    /// Render an entry as a line, without the trailing newline
    pub fn render(&self, entry: &LogEntry) -> Result<String> {
        let mut line = String::new();

        if let Some(ref format) = self.timestamp_format {
            line.push_str(&format!("[{}] ", format.format(&entry.timestamp)?));
        }
        line.push_str(&self.format_severity(entry));
        line.push_str(" --");

        if let Some(ref message) = entry.message {
            line.push(' ');
            line.push_str(&sanitize(message));
        }
        if let Some(ref data) = entry.data {
            if !data.is_empty() {
                line.push_str(&format!(" data={{{}}}", sanitize(&data.format_fields())));
            }
        }
        if let Some(ref exception) = entry.exception {
            line.push_str(&format!(" exception={}", sanitize(&exception.to_string())));
        }
        if !entry.context.is_empty() {
            line.push_str(&format!(
                " context={{{}}}",
                sanitize(&entry.context.format_fields())
            ));
        }

        Ok(line)
    }

    #[cfg(feature = "color")]
    fn format_severity(&self, entry: &LogEntry) -> String {
        use colored::Colorize;

        let padded = format!("{:5}", entry.severity.name());
        if self.use_colors {
            padded.color(entry.severity.color_code()).to_string()
        } else {
            padded
        }
    }

    #[cfg(not(feature = "color"))]
    fn format_severity(&self, entry: &LogEntry) -> String {
        format!("{:5}", entry.severity.name())
    }
}

/// Escape line breaks and tabs so one entry always stays on one line
fn sanitize(text: &str) -> String {
    text.replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

impl<W: Write + Send> Downstream for SimpleWriter<W> {
    fn accept(&self, entry: LogEntry) -> Result<bool> {
        let line = self.render(&entry)?;

        let mut dest = self.dest.lock();
        writeln!(dest, "{}", line)
            .and_then(|()| dest.flush())
            .map_err(|e| LoggerError::io_operation("writing log entry", "simple writer", e))?;
        Ok(true)
    }

    fn name(&self) -> &str {
        "simple"
    }
}
