//! Writer that discards everything

use crate::core::{Downstream, LogEntry, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct NullWriter;

impl NullWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Downstream for NullWriter {
    fn accept(&self, _entry: LogEntry) -> Result<bool> {
        Ok(true)
    }

    fn name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;

    #[test]
    fn test_accepts_and_discards() {
        let writer = NullWriter::new();
        assert!(writer.accept(LogEntry::new(Severity::Fatal)).unwrap());
        assert_eq!(writer.severity_threshold(), Severity::Debug);
    }
}
